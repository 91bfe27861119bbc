//! Scripted key input.
//!
//! A script is a whitespace separated list of key names, each optionally
//! prefixed with modifiers: `Down`, `Shift+Tab`, `Alt+Down`, `a`.

use markup::{Key, Modifiers};
use search_select::SearchSelect;

use crate::error::DemoError;

pub fn parse_token(token: &str) -> Result<(Key, Modifiers), DemoError> {
    let mut modifiers = Modifiers::new();
    let mut rest = token;
    loop {
        if let Some(r) = rest.strip_prefix("Shift+") {
            modifiers.shift = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("Ctrl+") {
            modifiers.ctrl = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("Alt+") {
            modifiers.alt = true;
            rest = r;
        } else {
            break;
        }
    }

    let key = Key::from_name(rest).ok_or_else(|| DemoError::UnknownKey(token.to_string()))?;
    Ok((key, modifiers))
}

pub fn parse_script(script: &str) -> Result<Vec<(Key, Modifiers)>, DemoError> {
    script.split_whitespace().map(parse_token).collect()
}

/// Replay a script into the widget, logging what each key did.
pub fn replay(widget: &SearchSelect, script: &str) -> Result<(), DemoError> {
    for (key, modifiers) in parse_script(script)? {
        let result = widget.on_key(key, modifiers)?;
        log::debug!("{:?} {:?} -> {:?} ({:?})", modifiers, key, result, widget.state());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key() {
        let (key, modifiers) = parse_token("Down").unwrap();
        assert_eq!(key, Key::Down);
        assert!(modifiers.none());
    }

    #[test]
    fn test_stacked_modifiers() {
        let (key, modifiers) = parse_token("Ctrl+Shift+a").unwrap();
        assert_eq!(key, Key::Char('a'));
        assert!(modifiers.ctrl && modifiers.shift && !modifiers.alt);
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(parse_token("Shift+Nope"), Err(DemoError::UnknownKey(_))));
    }

    #[test]
    fn test_replay_selects() {
        let source = search_select::SelectSource::new()
            .label("Fruit")
            .option("apple", "Apple")
            .option("banana", "Banana");
        let widget = SearchSelect::new(source.clone(), None).unwrap();
        replay(&widget, "b Enter Enter").unwrap();
        assert_eq!(source.selected_values(), vec!["banana"]);
    }
}
