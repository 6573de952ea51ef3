use vergen_git2::{BuildBuilder, CargoBuilder, Emitter, Git2Builder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Commit identity shown in window.buildInfo
    let git = Git2Builder::default()
        .sha(true)
        .dirty(true)
        .describe(true, true, None)
        .commit_timestamp(true)
        .build()?;

    let build = BuildBuilder::default().build_timestamp(true).build()?;

    let cargo = CargoBuilder::default().opt_level(true).build()?;

    Emitter::default()
        .add_instructions(&git)?
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .emit()?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-changed=site.json");
    Ok(())
}
