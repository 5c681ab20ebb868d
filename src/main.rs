//! Maximal clique enumeration (Bron–Kerbosch) command line tool

#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use std::io;
use std::process;

use clap::{App, load_yaml};

use bk_cliques::util::execute;


/** reads an instance, enumerates its maximal cliques and prints them.
exit codes: 0 success, 1 invalid input, 2 time limit reached
*/
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let stdout = io::stdout();
    let code = execute(&main_args, &mut stdout.lock());
    process::exit(code);
}
