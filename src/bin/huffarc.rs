use anyhow::{bail, Context, Result};
use huffarc::Archive;
use log::{info, LevelFilter};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "huffarc", about = "Huffman compression for files")]
struct Opt {
  /// Decompress an archive instead of compressing
  #[structopt(short, long)]
  decompress: bool,

  /// Archive format: binary, json or yaml
  #[structopt(short, long, default_value = "binary")]
  format: Format,

  /// Output file
  #[structopt(short)]
  out_file: Option<PathBuf>,

  /// Log progress at debug level
  #[structopt(short, long)]
  verbose: bool,

  /// Path to the input
  file: PathBuf,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Format {
  Binary,
  Json,
  Yaml,
}

impl FromStr for Format {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "binary" => Ok(Format::Binary),
      "json" => Ok(Format::Json),
      "yaml" => Ok(Format::Yaml),
      _ => bail!("unknown format '{}', expected binary, json or yaml", s),
    }
  }
}

impl Opt {
  fn output_file_path(&self) -> PathBuf {
    if let Some(path) = &self.out_file {
      return path.clone();
    }

    let mut path = self.file.clone();
    if !self.decompress {
      let mut name = path.file_name().unwrap_or_default().to_os_string();
      name.push(".huf");
      path.set_file_name(name);
    } else if path.extension().map_or(false, |ext| ext == "huf") {
      path.set_extension("");
    } else {
      path.set_extension("out");
    }
    path
  }
}

fn compress(opt: &Opt) -> Result<()> {
  let text = fs::read(&opt.file)
    .with_context(|| format!("failed to read {}", opt.file.display()))?;
  let archive = huffarc::compress(&text)
    .with_context(|| format!("failed to compress {}", opt.file.display()))?;

  let bytes = match opt.format {
    Format::Binary => archive.to_bytes(),
    Format::Json => serde_json::to_vec(&archive)?,
    Format::Yaml => serde_yaml::to_string(&archive)?.into_bytes(),
  };

  let out = opt.output_file_path();
  fs::write(&out, &bytes)
    .with_context(|| format!("failed to write {}", out.display()))?;
  info!(
    "{} -> {}: {} bytes to {} bytes",
    opt.file.display(),
    out.display(),
    text.len(),
    bytes.len()
  );
  Ok(())
}

fn decompress(opt: &Opt) -> Result<()> {
  let bytes = fs::read(&opt.file)
    .with_context(|| format!("failed to read {}", opt.file.display()))?;

  let archive: Archive = match opt.format {
    Format::Binary => Archive::from_bytes(&bytes)?,
    Format::Json => serde_json::from_slice(&bytes)?,
    Format::Yaml => serde_yaml::from_slice(&bytes)?,
  };
  let text = huffarc::decompress(&archive)
    .with_context(|| format!("failed to decompress {}", opt.file.display()))?;

  let out = opt.output_file_path();
  fs::write(&out, &text)
    .with_context(|| format!("failed to write {}", out.display()))?;
  info!("{} -> {}: {} bytes", opt.file.display(), out.display(), text.len());
  Ok(())
}

fn main() -> Result<()> {
  let opt = Opt::from_args();

  let mut logger = env_logger::Builder::from_default_env();
  if opt.verbose {
    logger.filter_level(LevelFilter::Debug);
  }
  logger.init();

  if opt.decompress {
    decompress(&opt)
  } else {
    compress(&opt)
  }
}
