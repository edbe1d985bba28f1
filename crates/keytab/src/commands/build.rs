use camino::Utf8PathBuf;

#[derive(clap::Args, Debug)]
pub struct BuildOpts {
    /// Path to the manifest file, or a directory containing `keytab.toml`.
    #[clap(short, long, default_value = ".")]
    path: Utf8PathBuf,

    /// Write generated files into this directory instead of the manifest's.
    #[clap(short, long)]
    output: Option<Utf8PathBuf>,
}

pub fn build(opts: BuildOpts) -> anyhow::Result<()> {
    let manifest_path = super::resolve_manifest_path(&opts.path)?;
    let manifest = driver::load_manifest(&manifest_path)?;

    let out_dir = match opts.output {
        Some(dir) => dir,
        None => super::default_out_dir(&manifest_path)?,
    };

    let summary = driver::build(&manifest, &out_dir)?;
    for path in &summary.written {
        println!("wrote `{path}`");
    }
    println!(
        "Generated {} table(s): {} written, {} unchanged.",
        manifest.tables.len(),
        summary.written.len(),
        summary.unchanged.len(),
    );
    Ok(())
}
