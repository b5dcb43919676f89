use pelmanism::console::{run_session, StdConsole};
use pelmanism::core::GameRng;

fn main() {
    env_logger::init();

    let mut console = StdConsole::new();
    run_session(&mut console, GameRng::from_entropy());
}
