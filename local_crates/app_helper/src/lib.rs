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

//! Helpers shared by command line applications made of subcommands.
//!
//! An [`AppHelper`] gathers [`Command`]s and dispatches the program arguments to the selected one,
//! after having set up the logging system.

mod app;
pub use app::AppHelper;

mod command;
pub use command::Command;

mod logging;

pub use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
pub use log::{debug, error, info, trace, warn, Level, LevelFilter};
