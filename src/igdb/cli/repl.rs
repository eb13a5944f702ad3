use super::render::{print_error, print_messages, print_records};
use igdb::api::IgdbApi;
use igdb::error::Result;
use igdb::prompt::Prompt;
use igdb::store::DataStore;
use std::io::{self, BufRead, Write};

pub const COMMAND_PROMPT: &str = "> ";

/// Prompt backed by stdin, printing prompts to stdout.
pub struct StdinPrompt {
    stdin: io::Stdin,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Prompt for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        read_raw_line(&mut self.stdin.lock())
    }
}

/// Reads up to and including the next newline. Bytes that are not UTF-8 are
/// replaced rather than failing the read, so the validators see (and reject)
/// them. `None` means end of input.
fn read_raw_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
    }
}

/// Reads and executes commands until the session exits or input runs out.
///
/// Rejected commands are reported and the loop continues; fatal errors are
/// returned to the caller.
pub fn run_loop<S, P>(api: &mut IgdbApi<S>, prompt: &mut P) -> Result<()>
where
    S: DataStore,
    P: Prompt,
{
    while api.is_running() {
        let line = match prompt.read_line(COMMAND_PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => {
                println!("Error reading input or EOF encountered.");
                api.shutdown();
                break;
            }
        };

        match api.execute(&line, prompt) {
            Ok(result) => {
                if let Some(records) = &result.listed_records {
                    print_records(records);
                }
                print_messages(&result.messages);
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => print_error(&e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use igdb::prompt::ScriptedPrompt;
    use igdb::store::memory::InMemoryStore;
    use std::io::Cursor;

    #[test]
    fn raw_line_tolerates_invalid_utf8() {
        let mut input = Cursor::new(b"caf\xe9\nlist\n".to_vec());

        assert_eq!(
            read_raw_line(&mut input).unwrap(),
            Some("caf\u{fffd}\n".to_string())
        );
        assert_eq!(read_raw_line(&mut input).unwrap(), Some("list\n".to_string()));
        assert_eq!(read_raw_line(&mut input).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_lines_do_not_end_the_session() {
        let (mut api, _) = IgdbApi::open(InMemoryStore::new()).unwrap();
        let mut prompt = ScriptedPrompt::new([
            "add @alice 10\n",
            "hello\n",
            "\u{fffd}\n",
            "add @bob 1\n",
            "caf\u{fffd}\n",
            "save\n",
            "exit\n",
        ]);

        run_loop(&mut api, &mut prompt).unwrap();

        assert!(!api.is_running());
        assert_eq!(api.store().saves(), 1);
        assert_eq!(api.store().contents().lines().count(), 1);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn loop_stops_at_end_of_input() {
        let (mut api, _) = IgdbApi::open(InMemoryStore::new()).unwrap();
        let mut prompt = ScriptedPrompt::new(["add @alice 10\n", "hello\n", "list\n"]);

        run_loop(&mut api, &mut prompt).unwrap();

        assert!(!api.is_running());
        assert!(api.database().is_empty());
        assert_eq!(api.store().saves(), 0);
        assert_eq!(
            prompt.shown(),
            ["> ", "Comment> ", "> ", "> "].map(String::from)
        );
    }

    #[test]
    fn loop_continues_after_rejections() {
        let (mut api, _) = IgdbApi::open(InMemoryStore::new()).unwrap();
        let mut prompt = ScriptedPrompt::new([
            "bogus\n",
            "add alice 1\n",
            "add @alice 1\n",
            "hi\n",
            "exit\n",
            "save\n",
            "exit\n",
            "list\n",
        ]);

        run_loop(&mut api, &mut prompt).unwrap();

        assert!(!api.is_running());
        assert_eq!(api.store().contents().lines().count(), 1);
        assert_eq!(prompt.remaining(), 1);
    }
}
