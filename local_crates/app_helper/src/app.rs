// app_helper
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

use crate::{
    logging::{self, DEFAULT_LOGGING_LEVEL, LOGGING_LEVELS},
    Command,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::error;

const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

/// The entry point of an application made of subcommands.
///
/// # Example
///
/// ```no_run
/// use app_helper::AppHelper;
///
/// let app = AppHelper::new("my_app", "0.1.0", "Jane Doe", "an application without commands");
/// app.launch_app();
/// ```
pub struct AppHelper<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> AppHelper<'a> {
    /// Creates a new application without any command.
    pub fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    /// Adds a command to this application.
    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    /// Launches the application using the program arguments.
    ///
    /// The logger is initialized and the selected command is executed.
    /// If the command fails, the error and its causes are logged and the process exits with status 1.
    pub fn launch_app(&self) {
        let matches = self.clap_app().get_matches();
        let result = logging::parse_level(logging_level(&matches))
            .and_then(logging::init_logger)
            .and_then(|()| self.execute_command(&matches));
        if let Err(e) = result {
            for message in error_chain(&e) {
                error!("{}", message);
            }
            std::process::exit(1);
        }
    }

    pub(crate) fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .version(self.version)
            .author(self.author)
            .about(self.about)
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .setting(AppSettings::VersionlessSubcommands)
            .arg(
                Arg::with_name(ARG_LOGGING_LEVEL)
                    .long("logging-level")
                    .takes_value(true)
                    .possible_values(&LOGGING_LEVELS)
                    .default_value(DEFAULT_LOGGING_LEVEL)
                    .global(true)
                    .help("sets the minimal level of the displayed log messages"),
            );
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    pub(crate) fn execute_command(&self, matches: &ArgMatches<'_>) -> Result<()> {
        let (name, sub_matches) = matches.subcommand();
        let sub_matches = sub_matches.ok_or_else(|| anyhow!("no command was provided"))?;
        match self.commands.iter().find(|c| c.name() == name) {
            Some(c) => c.execute(sub_matches),
            None => Err(anyhow!(r#"no such command "{}""#, name)),
        }
    }
}

/// Returns the logging level, which may be set before or after the subcommand name.
fn logging_level<'b>(matches: &'b ArgMatches<'_>) -> &'b str {
    let (_, sub_matches) = matches.subcommand();
    sub_matches
        .filter(|m| m.occurrences_of(ARG_LOGGING_LEVEL) > 0)
        .unwrap_or(matches)
        .value_of(ARG_LOGGING_LEVEL)
        .unwrap_or(DEFAULT_LOGGING_LEVEL)
}

fn error_chain(e: &anyhow::Error) -> Vec<String> {
    e.chain()
        .enumerate()
        .map(|(i, cause)| {
            if i == 0 {
                format!("{}", cause)
            } else {
                format!("caused by: {}", cause)
            }
        })
        .collect()
}
