//! CLI command for the scripted assistant

use clap::Args;

use crate::error::SocialFinResult;
use crate::services::Assistant;

/// Options for `ask`
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Message for the assistant
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Also print the recognized intent
    #[arg(long)]
    pub show_intent: bool,
}

/// Handle `ask`
pub fn handle_ask_command(args: AskArgs) -> SocialFinResult<()> {
    let message = args.message.join(" ");
    let reply = Assistant::new().reply(&message);

    if args.show_intent {
        println!("[{}]", reply.intent);
    }
    println!("{}", reply.text);

    Ok(())
}
