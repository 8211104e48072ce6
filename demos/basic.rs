use std::cell::Cell;
use std::rc::Rc;

use argparse_lite::{argparse, Arg, Flag, Value};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let loud = Rc::new(Cell::new(false));
    let on_loud = loud.clone();

    let mut p = argparse!("help.margin=28");
    p.def_flag_with_callback(
        Flag::new("--verbose", "-v", "Print what is being done."),
        move || on_loud.set(true),
    );
    p.def_flag(Flag::new("--size", "-s", "Block size in bytes.")
        .with_value(Value::new("4096").name("bytes").required(true)));
    p.def_flag(Flag::new("--mode", "-m", "How to copy.")
        .with_value(Value::choose(&["copy", "link", "move"])));
    p.def_arg(Arg::new("source").description("File to read."));
    p.def_arg(Arg::new("dest").description("Where to write.").required(false).default_value("out.bin"));

    if !p.parse_env() {
        eprint!("{}", p.error());
        p.print_help();
        std::process::exit(1);
    }
    if p.check("--help") {
        p.print_help();
        return;
    }

    let size: usize = p["--size"].read().unwrap_or(4096);
    println!("{} {} -> {} in blocks of {}", p["--mode"].value.text, p[0].text(), p[1].value.text, size);
    if loud.get() {
        for (_, f) in p.flags().filter(|(_, f)| f.is_set && !f.is_declared) {
            println!("ignoring unknown flag {}", f.spellings());
        }
        for extra in p.args().iter().filter(|a| !a.is_declared()) {
            println!("ignoring extra argument {}", extra.text());
        }
    }
}
