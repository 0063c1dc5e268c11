// cnf_tool
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod labels_command;
pub(crate) use labels_command::LabelsCommand;

mod normalize_command;
pub(crate) use normalize_command::NormalizeCommand;

mod substitute_command;
pub(crate) use substitute_command::SubstituteCommand;

use anyhow::{Context, Result};
use app_helper::{info, Arg, ArgMatches};
use lite_cnf::{BooleanFormula, FormulaReader};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

const ARG_INPUT: &str = "INPUT";
const ARG_OUTPUT: &str = "OUTPUT";

pub(crate) fn arg_input<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_INPUT)
        .long("input")
        .short("i")
        .takes_value(true)
        .help("sets the input file (one formula per line)")
        .required(true)
}

pub(crate) fn read_input(arg_matches: &ArgMatches<'_>) -> Result<Vec<BooleanFormula<String>>> {
    let file_path = arg_matches
        .value_of(ARG_INPUT)
        .context("missing input file")?;
    info!("reading input file {}", canonicalize(file_path));
    let mut file =
        File::open(file_path).with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    let formulas = FormulaReader::new()
        .read(&mut file)
        .with_context(|| format!(r#"while reading file "{}""#, file_path))?;
    info!("read {} formula(s)", formulas.len());
    Ok(formulas)
}

pub(crate) fn arg_output<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_OUTPUT)
        .long("output")
        .short("o")
        .takes_value(true)
        .help("sets the output file (standard output if not set)")
}

pub(crate) fn create_output(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn Write>> {
    Ok(match arg_matches.value_of(ARG_OUTPUT) {
        Some(o) => {
            let r = Box::new(
                File::create(o).with_context(|| format!(r#"while creating file "{}""#, o))?,
            );
            info!("setting output file to {}", canonicalize(o));
            r
        }
        None => {
            info!("setting output to STDOUT");
            Box::new(std::io::stdout())
        }
    })
}

pub(crate) fn canonicalize(file_path: &str) -> String {
    match fs::canonicalize(&PathBuf::from(file_path)) {
        Ok(p) => format!("{}", p.display()),
        Err(_) => file_path.to_string(),
    }
}
