// output the NSS/PSS arrays of a string

use std::io;
use std::io::prelude::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "arrays", about = "output NSS/PSS arrays of each input line")]
struct Opt {
    #[structopt(long)]
    nss: bool,
    #[structopt(long)]
    pss: bool,
    #[structopt(long)]
    lce: bool,
    #[structopt(long)]
    suffix_array: bool,
}

fn show_row(name: &str, vals: impl Iterator<Item = u32>) {
    print!("{:<14}:", name);
    for v in vals {
        print!("{:>4}", v);
    }
    println!();
}

fn main() {
    let opt = Opt::from_args();
    for line in io::stdin().lock().lines() {
        let s = line.unwrap().as_bytes().to_vec();
        let xss = rlyndon::right_lyndon(&s);

        if opt.nss {
            show_row("nss array", xss.iter().map(|e| e.nss));
            if opt.lce {
                show_row("nss lce array", xss.iter().map(|e| e.nss_lce));
            }
        }
        if opt.pss {
            show_row("pss array", xss.iter().map(|e| e.pss));
            if opt.lce {
                show_row("pss lce array", xss.iter().map(|e| e.pss_lce));
            }
        }
        if opt.suffix_array {
            let sa = {
                let mut sa = vec![0; s.len()];
                cdivsufsort::sort_in_place(&s, &mut sa);
                sa
            };
            show_row("suffix array", sa.iter().map(|&v| v as u32));
        }
    }
}
