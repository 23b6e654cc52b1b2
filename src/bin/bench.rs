// time the NSS/PSS constructions on a file and cross-check their results

use anyhow::{bail, Result};
use rlyndon::{
    right_lyndon, right_lyndon_extension_improved, right_lyndon_extension_naive,
    right_lyndon_naive, XssEntry,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bench",
    about = "time the NSS/PSS array constructions and cross-check their results"
)]
struct Opt {
    /// Input file
    #[structopt(parse(from_os_str))]
    input_file: PathBuf,

    /// Only process a prefix of this many bytes
    #[structopt(short = "p", long)]
    prefix: Option<usize>,

    /// Skip the quadratic baseline
    #[structopt(long)]
    skip_naive: bool,
}

fn measure<T>(name: &str, n: usize, f: impl FnOnce() -> T) -> T {
    println!("{} start!", name);
    let start = Instant::now();
    let res = f();
    let ms = start.elapsed().as_millis() as u64;
    let mib = n as f64 / 1024.0 / 1024.0;
    let mibs = if ms == 0 { f64::NAN } else { mib / (ms as f64 / 1000.0) };
    println!("{} time: {}[ms] = {:.2}mibs", name, ms, mibs);
    res
}

fn check(reference: &[XssEntry], result: &[XssEntry]) -> Result<()> {
    for i in 0..reference.len() {
        if reference[i].nss != result[i].nss || reference[i].nss_lce != result[i].nss_lce {
            bail!("nss arrays diverge at position {}", i);
        }
    }
    println!("results consistent\n");
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let mut text = fs::read(&opt.input_file)?;
    if let Some(p) = opt.prefix {
        text.truncate(p);
    }
    let n = text.len();
    println!("string = {}", opt.input_file.display());
    println!("     n = {}\n", n);

    let reference = measure("extension linear", n, || right_lyndon(&text));
    println!();

    let result = measure("extension improved", n, || {
        right_lyndon_extension_improved(&text)
    });
    check(&reference, &result)?;

    let result = measure("extension naive", n, || right_lyndon_extension_naive(&text));
    check(&reference, &result)?;

    if !opt.skip_naive {
        let result = measure("naive (no extension)", n, || right_lyndon_naive(&text));
        check(&reference, &result)?;
    }

    Ok(())
}
