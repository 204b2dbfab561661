//! The `dump` command: parse a file and write its model back.

use std::path::Path;

use red_fmt::RobotDumper;

use super::load;
use crate::CliOptions;

/// Dump `path` to stdout, or to the `-o` file when one is given.
pub fn dump_file(path: &Path, options: &CliOptions) -> bool {
    let Some(output) = load(path, options) else {
        return false;
    };
    let dumper = RobotDumper::new(options.dump_config());
    match &options.output {
        Some(target) => match dumper.dump_to_file(output.file(), target) {
            Ok(()) => true,
            Err(error) => {
                eprintln!("error: {error}");
                false
            }
        },
        None => {
            print!("{}", dumper.dump(output.file()));
            true
        }
    }
}
