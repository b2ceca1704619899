//! Interactive session.
//!
//! Each line is parsed as a regular subcommand and run against one shared
//! storefront, so navigation, checkout and admin edits carry over from line
//! to line.

use anyhow::Result;
use clap::Parser;
use dialoguer::Input;

use crate::context::Context;
use crate::Commands;

#[derive(Parser)]
#[command(name = "retrove", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// Run the shell command.
pub fn run(ctx: &mut Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("The shell does not support --json");
    }

    let store_name = ctx.store()?.config().store.name.clone();
    ctx.output.header(&format!("{} shell", store_name));
    ctx.output.info("Type `help` for commands, `exit` to leave.");

    loop {
        let prompt = format!("{} [cart: {}]", store_name.to_lowercase(), ctx.store()?.cart().len());
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let words = match split_line(&line) {
            Ok(words) => words,
            Err(e) => {
                ctx.output.warn(e);
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => continue,
            Some("exit") | Some("quit") => break,
            _ => {}
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                e.print()?;
                continue;
            }
        };

        if matches!(command, Commands::Shell) {
            ctx.output.warn("Already in the shell");
            continue;
        }

        if let Err(e) = crate::dispatch(command, ctx) {
            ctx.output.error(&format!("{:#}", e));
        }
    }

    Ok(())
}

/// Split a line into words, honouring single and double quotes.
fn split_line(line: &str) -> Result<Vec<String>, &'static str> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_line("  cart add   12 ").unwrap(), vec!["cart", "add", "12"]);
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quoted_words() {
        assert_eq!(
            split_line(r#"admin add-product --name "Jaket Denim" --material 'Wol'"#).unwrap(),
            vec!["admin", "add-product", "--name", "Jaket Denim", "--material", "Wol"]
        );
        assert_eq!(split_line(r#"--city """#).unwrap(), vec!["--city", ""]);
        assert!(split_line(r#"--name "Dewi"#).is_err());
    }

    #[test]
    fn test_shell_lines_parse_as_commands() {
        let line = ShellLine::try_parse_from(["checkout", "--product", "3", "--yes"]).unwrap();
        assert!(matches!(line.command, Commands::Checkout(ref args) if args.product == Some(3)));

        let line = ShellLine::try_parse_from(["admin", "set-status", "RTV-1001", "paid"]).unwrap();
        assert!(matches!(line.command, Commands::Admin(_)));

        assert!(ShellLine::try_parse_from(["launch"]).is_err());
    }
}
