//! Interactive matrix session.
//!
//! Reads one command per line, turns it into an intent and repaints the
//! view after every mutation. The store lives only as long as the session.

use std::io::{self, BufRead, IsTerminal, Write};

use eisenhower_core::{Config, InputForm, Intent, Quadrant, TaskId, TaskStore};

use crate::render;

const HELP: &str = "\
commands:
  add <u> <i> <text>       add a task with urgency and importance (1-10)
  add [u=N] [i=N] <text>   same, omitted scores default from config
  toggle <id>              mark done / not done
  delete <id>              remove a task
  clear                    remove all completed tasks
  move <id> <quadrant>     drop a task on a quadrant (1-4 or do/decide/delegate/delete)
  list                     show the task list
  matrix                   show the quadrant panels
  json                     dump the view as JSON
  help                     this text
  quit                     leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Empty,
    Add {
        text: String,
        urgency: Option<i64>,
        importance: Option<i64>,
    },
    Toggle(TaskId),
    Delete(TaskId),
    Clear,
    Move(TaskId, u8),
    List,
    Matrix,
    Json,
    Help,
    Quit,
}

fn parse_id(arg: Option<&str>) -> Result<TaskId, String> {
    arg.ok_or_else(|| "missing task id".to_string())?
        .parse::<TaskId>()
        .map_err(|e| e.to_string())
}

/// Numbers go through as-is so the store can ignore ones outside 1-4.
fn parse_quadrant(arg: Option<&str>) -> Result<u8, String> {
    let arg = arg.ok_or_else(|| "missing quadrant".to_string())?;
    if let Ok(n) = arg.parse::<u8>() {
        return Ok(n);
    }
    arg.parse::<Quadrant>()
        .map(Quadrant::number)
        .map_err(|e| e.to_string())
}

fn parse_score(value: &str, name: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("{name} must be a number, got '{value}'"))
}

pub fn parse_line(input: &str) -> Result<Line, String> {
    let mut words = input.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Line::Empty);
    };

    match command.to_ascii_lowercase().as_str() {
        "add" | "a" => {
            let words: Vec<&str> = words.collect();
            // `add <urgency> <importance> <text...>`
            if let [u, i, text @ ..] = words.as_slice() {
                if let (Ok(urgency), Ok(importance)) = (u.parse::<i64>(), i.parse::<i64>()) {
                    return Ok(Line::Add {
                        text: text.join(" "),
                        urgency: Some(urgency),
                        importance: Some(importance),
                    });
                }
            }

            let mut urgency = None;
            let mut importance = None;
            let mut rest: Vec<&str> = Vec::new();
            for word in words {
                if rest.is_empty() {
                    if let Some(v) = word.strip_prefix("u=") {
                        urgency = Some(parse_score(v, "urgency")?);
                        continue;
                    }
                    if let Some(v) = word.strip_prefix("i=") {
                        importance = Some(parse_score(v, "importance")?);
                        continue;
                    }
                }
                rest.push(word);
            }
            Ok(Line::Add {
                text: rest.join(" "),
                urgency,
                importance,
            })
        }
        "toggle" | "t" | "done" => Ok(Line::Toggle(parse_id(words.next())?)),
        "delete" | "rm" => Ok(Line::Delete(parse_id(words.next())?)),
        "clear" => Ok(Line::Clear),
        "move" | "mv" => {
            let id = parse_id(words.next())?;
            let quadrant = parse_quadrant(words.next())?;
            Ok(Line::Move(id, quadrant))
        }
        "list" | "ls" => Ok(Line::List),
        "matrix" | "m" => Ok(Line::Matrix),
        "json" => Ok(Line::Json),
        "help" | "?" => Ok(Line::Help),
        "quit" | "exit" | "q" => Ok(Line::Quit),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

pub struct Session<'a> {
    store: TaskStore,
    form: InputForm,
    config: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(store: TaskStore, config: &'a Config) -> Self {
        Self {
            store,
            form: config.input_form(),
            config,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Handle one parsed line. Returns `false` when the session should end.
    pub fn handle<W: Write>(&mut self, line: Line, out: &mut W) -> io::Result<bool> {
        let intent = match line {
            Line::Empty => return Ok(true),
            Line::Quit => return Ok(false),
            Line::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Line::List => {
                write!(out, "{}", render::task_list(self.store.view(), self.config))?;
                return Ok(true);
            }
            Line::Matrix => {
                write!(out, "{}", render::matrix(self.store.view(), self.config))?;
                return Ok(true);
            }
            Line::Json => {
                let json = serde_json::to_string_pretty(self.store.view()).map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
                return Ok(true);
            }
            Line::Add {
                text,
                urgency,
                importance,
            } => {
                self.form.text = text;
                if let Some(u) = urgency {
                    self.form.urgency = u;
                }
                if let Some(i) = importance {
                    self.form.importance = i;
                }
                match self.form.submit() {
                    Some(intent) => intent,
                    None => {
                        self.form.reset();
                        return Ok(true);
                    }
                }
            }
            Line::Toggle(id) => Intent::Toggle { id },
            Line::Delete(id) => Intent::Delete { id },
            Line::Clear => Intent::ClearCompleted,
            Line::Move(id, quadrant) => Intent::Reclassify { id, quadrant },
        };

        self.store.apply(intent);
        write!(out, "{}", render::full(self.store.view(), self.config))?;
        Ok(true)
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> io::Result<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        for line in input.lines() {
            let line = line?;
            let keep_going = match parse_line(&line) {
                Ok(parsed) => self.handle(parsed, out)?,
                Err(message) => {
                    writeln!(out, "{message}")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    if interactive {
        writeln!(stdout, "Eisenhower matrix session. Type 'help' for commands.")?;
    }
    let mut session = Session::new(TaskStore::new(), config);
    session.run(stdin.lock(), &mut stdout, interactive)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eisenhower_core::FixedClock;

    #[test]
    fn test_parse_add_with_scores() {
        assert_eq!(
            parse_line("add u=8 i=9 Buy   milk").unwrap(),
            Line::Add {
                text: "Buy milk".to_string(),
                urgency: Some(8),
                importance: Some(9)
            }
        );
        // score-looking words after the text are part of the text
        assert_eq!(
            parse_line("add Read chapter i=2").unwrap(),
            Line::Add {
                text: "Read chapter i=2".to_string(),
                urgency: None,
                importance: None
            }
        );
        assert!(parse_line("add u=high x").is_err());
    }

    #[test]
    fn test_parse_add_positional_scores() {
        assert_eq!(
            parse_line("add 8 8 Buy milk").unwrap(),
            Line::Add {
                text: "Buy milk".to_string(),
                urgency: Some(8),
                importance: Some(8)
            }
        );
        // a single leading number is part of the text
        assert_eq!(
            parse_line("add 2027 budget").unwrap(),
            Line::Add {
                text: "2027 budget".to_string(),
                urgency: None,
                importance: None
            }
        );
    }

    #[test]
    fn test_positional_add_lands_in_do() {
        let config = Config::default();
        let mut session = Session::new(TaskStore::with_clock(FixedClock(1)), &config);
        let mut out = Vec::new();
        session.run("add 8 8 Buy milk\n".as_bytes(), &mut out, false).unwrap();

        let task = session.store().get(TaskId(1)).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert_eq!((task.urgency.get(), task.importance.get()), (8, 8));
        assert_eq!(eisenhower_core::compute_quadrant(task), Quadrant::Do);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_line("move 12 2").unwrap(), Line::Move(TaskId(12), 2));
        assert_eq!(parse_line("mv 12 delegate").unwrap(), Line::Move(TaskId(12), 3));
        assert_eq!(parse_line("move 12 7").unwrap(), Line::Move(TaskId(12), 7));
        assert!(parse_line("move 12 someday").is_err());
        assert!(parse_line("move 12").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_line("   ").unwrap(), Line::Empty);
        assert_eq!(parse_line("TOGGLE 5").unwrap(), Line::Toggle(TaskId(5)));
        assert_eq!(parse_line("rm 5").unwrap(), Line::Delete(TaskId(5)));
        assert!(parse_line("toggle five").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn test_session_script() {
        let config = Config::default();
        let mut session = Session::new(TaskStore::with_clock(FixedClock(500)), &config);
        let script = "add u=9 i=9 Ship release\nadd Tidy desk\nadd    \nmove 501 1\ntoggle 500\nclear\nquit\nadd never\n";
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out, false).unwrap();

        let store = session.store();
        assert_eq!(store.len(), 1);
        let desk = store.get(TaskId(501)).unwrap();
        assert_eq!(desk.text, "Tidy desk");
        assert_eq!((desk.urgency.get(), desk.importance.get()), (8, 8));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Q1 Do (Urgent & Important) =="));
        assert!(!text.contains("never"));
    }

    #[test]
    fn test_form_defaults_restored_after_add() {
        let mut config = Config::default();
        config.set("input.default_urgency", "7").unwrap();
        let mut session = Session::new(TaskStore::with_clock(FixedClock(1)), &config);
        let mut out = Vec::new();
        session
            .run("add u=2 i=2 first\nadd second\n".as_bytes(), &mut out, false)
            .unwrap();

        let second = session.store().get(TaskId(2)).unwrap();
        assert_eq!((second.urgency.get(), second.importance.get()), (7, 5));
    }
}
