// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

use crate::models::{Category, PaymentKind};

pub fn build_cli() -> Command {
    Command::new("finanza")
        .version(clap::crate_version!())
        .about("Personal expense and income tracking with AI budgeting advice")
        .subcommand(
            Command::new("login")
                .about("Sign in and create the local profile")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .required(true)
                        .help("Email address"),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .required(true)
                        .help("Password (not verified against any backend)"),
                )
                .arg(Arg::new("name").long("name").short('n').help("Display name")),
        )
        .subcommand(
            Command::new("subscribe")
                .about("Activate the subscription through the simulated checkout")
                .arg(
                    Arg::new("method")
                        .long("method")
                        .short('m')
                        .value_parser(["pix", "card", "boleto"])
                        .default_value("pix")
                        .help("Payment method"),
                ),
        )
        .subcommand(Command::new("logout").about("Sign out and delete the stored profile"))
        .subcommand(Command::new("status").about("Show the current screen and user"))
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .value_parser(Category::ALL.map(|c| c.as_str()))
                                .default_value("food"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .short('k')
                                .value_parser(PaymentKind::ALL.map(|k| k.as_str()))
                                .default_value("single")
                                .help("Payment kind"),
                        )
                        .arg(
                            Arg::new("installments")
                                .long("installments")
                                .short('i')
                                .help("Installment count (required when kind is installments)"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, most recent first")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Record and manage incomes")
                .subcommand(
                    Command::new("add")
                        .about("Record a new income")
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("extra")
                                .long("extra")
                                .action(ArgAction::SetTrue)
                                .help("Mark as one-off income rather than recurring"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List incomes, most recent first")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an income by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Balance, totals and recent entries")
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("chart")
                .about("Aggregated series for charting")
                .subcommand(
                    Command::new("categories")
                        .about("Expense totals grouped by category")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Income vs expense series")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("advisor")
                .about("AI budgeting advice")
                .subcommand(Command::new("get").about("Request advice on the current finances"))
                .subcommand(
                    Command::new("set-model")
                        .about("Override the assistant model")
                        .arg(Arg::new("model").required(true)),
                ),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}
