//! When steps for message dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use rstest_bdd_macros::when;

#[when("the message is sent")]
fn send_message(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    let message = world
        .pending
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no message staged in scenario world"))?;
    world.last_send_result = Some(run_async(world.client.send(message)));
    Ok(())
}
