use camino::Utf8PathBuf;

#[derive(clap::Args, Debug)]
pub struct CheckOpts {
    /// Path to the manifest file, or a directory containing `keytab.toml`.
    #[clap(short, long, default_value = ".")]
    path: Utf8PathBuf,
}

pub fn check(opts: CheckOpts) -> anyhow::Result<()> {
    let manifest_path = super::resolve_manifest_path(&opts.path)?;
    let manifest = driver::load_manifest(&manifest_path)?;

    println!(
        "`{manifest_path}` is valid: {} table(s).",
        manifest.tables.len()
    );
    Ok(())
}
