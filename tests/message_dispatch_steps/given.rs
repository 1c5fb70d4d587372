//! Given steps for message dispatch BDD scenarios.

use super::world::DispatchWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use switchboard::messages::{
    domain::{FileObject, TemplateObject},
    variants::{MessengerFile, SmsText, WhatsAppTemplate},
};

const SENDER: &str = "447700900001";

#[given("a messages client with an accepting transport")]
fn accepting_client(world: &mut DispatchWorld) {
    *world = DispatchWorld::new();
}

#[given("a messages client whose transport rejects with status {status:u16}")]
fn rejecting_client(world: &mut DispatchWorld, status: u16) {
    world.reject_with(status);
}

#[given(
    r#"a WhatsApp template "{name}" with parameter "{parameter}" and locale "{locale}" addressed to "{to}""#
)]
fn whatsapp_template(
    world: &mut DispatchWorld,
    name: String,
    parameter: String,
    locale: String,
    to: String,
) -> Result<(), eyre::Report> {
    let template = TemplateObject::new(name, [parameter]).wrap_err("build template object")?;
    world.stage(WhatsAppTemplate::new(to, SENDER, template, locale));
    Ok(())
}

#[given(r#"a Messenger file "{url}" addressed to "{to}" with no options"#)]
fn messenger_file_without_options(
    world: &mut DispatchWorld,
    url: String,
    to: String,
) -> Result<(), eyre::Report> {
    let file = FileObject::new(url).wrap_err("build file object")?;
    world.stage(MessengerFile::new(to, SENDER, file, None, None));
    Ok(())
}

#[given(r#"a Messenger file "{url}" addressed to "{to}" with category "{category}""#)]
fn messenger_file_with_category(
    world: &mut DispatchWorld,
    url: String,
    to: String,
    category: String,
) -> Result<(), eyre::Report> {
    let file = FileObject::new(url).wrap_err("build file object")?;
    world.stage(MessengerFile::new(to, SENDER, file, Some(category), None));
    Ok(())
}

#[given(r#"an SMS "{text}" addressed to "{to}""#)]
fn sms_addressed(world: &mut DispatchWorld, text: String, to: String) {
    world.stage(SmsText::new(to, SENDER, text));
}

#[given(r#"an SMS "{text}" with no recipient"#)]
fn sms_without_recipient(world: &mut DispatchWorld, text: String) {
    world.stage(SmsText::new("", SENDER, text));
}
