// generate structured test words

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "gen", about = "generate structured test words")]
struct Opt {
    /// Order of the generated word
    #[clap(short = 'k', long, default_value_t = 5)]
    order: usize,

    #[clap(long)]
    fibonacci: bool,

    #[clap(long)]
    fibonacci_plus: bool,

    #[clap(long)]
    thue_morse: bool,

    #[clap(long)]
    period_doubling: bool,
}

fn show_word(w: &[u8]) {
    println!("{}", std::str::from_utf8(w).unwrap());
}

fn main() {
    let opt = Opt::parse();
    if opt.fibonacci {
        show_word(&rlyndon::words::fibonacci(opt.order));
    }
    if opt.fibonacci_plus {
        show_word(&rlyndon::words::fibonacci_plus(opt.order));
    }
    if opt.thue_morse {
        show_word(&rlyndon::words::thue_morse(opt.order));
    }
    if opt.period_doubling {
        show_word(&rlyndon::words::period_doubling(opt.order));
    }
}
