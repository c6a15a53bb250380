//! Build script embedding the git commit SHA (via vergen-gitcl) for the
//! version string shown in the window title and start-up log.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::all_git()?;

    Emitter::default().add_instructions(&gitcl)?.emit()?;

    Ok(())
}
