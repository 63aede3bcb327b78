use std::io::{BufRead, Write};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output;
use crate::profile::Profile;
use crate::prompt::Prompter;

const GREETING: &str = "Dear user, here you can fill your profile";

pub fn run<R: BufRead, W: Write>(ctx: &AppContext, input: R, output: W) -> AppResult<()> {
    let mut prompter = Prompter::new(input, output);
    let profile = collect(ctx, &mut prompter)?;
    tracing::info!(hobbies = profile.hobbies().len(), "profile complete");

    let mut out = prompter.into_output();
    if ctx.clear_screen {
        output::text::clear_screen(&mut out)?;
    } else {
        writeln!(out)?;
    }
    ctx.output.emit_profile(&mut out, &profile, ctx.today)
}

pub fn collect<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
) -> AppResult<Profile> {
    prompter.say(GREETING)?;

    let name = prompter.prompt_name()?;
    let birthdate = prompter.prompt_birthdate(ctx.today)?;
    let age = birthdate.age_on(ctx.today);
    tracing::debug!(age, "derived age");
    prompter.say(&format!("You are {age} years old."))?;
    let hometown = prompter.prompt_hometown()?;
    let hobbies = prompter.collect_hobbies()?;

    Ok(Profile::new(name, birthdate, hometown, hobbies))
}
