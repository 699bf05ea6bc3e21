// src/bin/set_dev_cli.rs
//
// Построчная dev-консоль для одной партии.
// Запуск: set_dev_cli [config.json]; логи через RUST_LOG=debug.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use set_engine::api::{answer, execute, ApiError, Command, CommandResponse, Query, QueryResponse};
use set_engine::domain::{Card, CardId, GameConfig};
use set_engine::engine::{GameEventKind, GameSession};
use set_engine::infra::{rng_for_config, DeterministicRng};

fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("[CLI] Плохой конфиг: {err:?}");
            std::process::exit(2);
        }
    };

    println!("set_dev_cli: стартуем партию (initial_deal = {})…", config.initial_deal);
    let rng = rng_for_config(&config);
    let mut session = GameSession::new(config, rng);
    print_tableau(&session);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("[CLI] Ошибка чтения stdin: {err}");
                break;
            }
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            continue;
        };

        let command = match head {
            "q" | "quit" | "exit" => break,
            "h" | "help" => {
                print_help();
                continue;
            }
            "s" | "show" => {
                print_tableau(&session);
                continue;
            }
            "e" | "explain" => {
                print_query(answer(&session, &Query::MatchExplanation));
                continue;
            }
            "m" | "matches" => {
                print_query(answer(&session, &Query::AllMatches));
                continue;
            }
            "t" | "tap" => match args.first().map(|a| parse_card_ref(a)) {
                Some(Ok(card_id)) => Command::TapCard { card_id },
                Some(Err(err)) => {
                    println!("[CLI] {err}");
                    continue;
                }
                None => {
                    println!("[CLI] Укажите карту: tap 2GTO или tap 14");
                    continue;
                }
            },
            "d" | "deal" => Command::DealThree,
            "a" | "ack" => Command::Acknowledge,
            "hint" => Command::RequestHint,
            "n" | "new" => Command::NewGame,
            "tick" => {
                let millis = args.first().and_then(|a| a.parse().ok()).unwrap_or(1000);
                Command::Tick { millis }
            }
            "json" => match Command::from_json_str(&args.join(" ")) {
                Ok(command) => command,
                Err(err) => {
                    println!("[CLI] {err:?}");
                    continue;
                }
            },
            other => {
                println!("[CLI] Неизвестная команда: {other}");
                continue;
            }
        };

        match execute(&mut session, command) {
            Ok(response) => print_response(&response),
            Err(err) => print_error(&err),
        }
    }

    println!("[CLI] Завершение работы dev-CLI. Очки: {}", session.score());
}

fn load_config() -> Result<GameConfig, ApiError> {
    let Some(path) = env::args().nth(1) else {
        return Ok(GameConfig::default());
    };
    let json = fs::read_to_string(&path)
        .map_err(|e| ApiError::BadRequest(format!("{path}: {e}")))?;
    Ok(GameConfig::from_json_str(&json)?)
}

/// Карта по id ("14") или по коду ("2GTO").
fn parse_card_ref(arg: &str) -> Result<CardId, String> {
    if let Ok(id) = arg.parse::<CardId>() {
        return Ok(id);
    }
    arg.parse::<Card>().map(|card| card.id)
}

fn print_help() {
    println!("команды: tap <id|код>, deal, ack, hint, tick [ms], new, show, explain, matches, json <команда>, quit");
}

fn print_tableau(session: &GameSession<DeterministicRng>) {
    if let QueryResponse::Tableau(view) = answer(session, &Query::GetTableau) {
        println!("================ TABLEAU ================");
        println!(
            "phase={} score={} deck={} selected={:?}",
            view.phase, view.score, view.deck_remaining, view.selected
        );
        for card in &view.cards {
            let mark = if card.selected { "*" } else { " " };
            println!("{mark} [{:>2}] {} {}", card.id, card.code, card.description);
        }
        if let Some(outcome) = view.outcome {
            println!("ИГРА ОКОНЧЕНА: {outcome:?}");
        }
        println!("=========================================");
    }
}

fn print_response(response: &CommandResponse) {
    match response {
        CommandResponse::TableauState { events, tableau } => {
            for event in events {
                match &event.kind {
                    GameEventKind::MatchJudged { is_match, points } => {
                        println!("#{} MatchJudged: set={is_match}, +{points}", event.index);
                        if let Some(explanation) = &tableau.explanation {
                            println!("    {explanation}");
                        }
                    }
                    other => println!("#{} {other:?}", event.index),
                }
            }
            println!(
                "phase={} score={} deck={} selected={:?}",
                tableau.phase, tableau.score, tableau.deck_remaining, tableau.selected
            );
        }
        CommandResponse::Hint { hint, tableau } => {
            println!("{}", hint.message);
            for card in &hint.cards {
                println!("  [{:>2}] {} {}", card.id, card.code, card.description);
            }
            println!("score={}", tableau.score);
        }
    }
}

fn print_query(response: QueryResponse) {
    match response {
        QueryResponse::Explanation(text) => println!("{text}"),
        QueryResponse::Matches(matches) => {
            println!("сетов в раскладе: {}", matches.len());
            for cards in matches {
                let codes: Vec<&str> = cards.iter().map(|c| c.code.as_str()).collect();
                println!("  {}", codes.join(" "));
            }
        }
        other => println!("{other:?}"),
    }
}

fn print_error(err: &ApiError) {
    println!("[CLI] Ошибка: {err:?}");
}
