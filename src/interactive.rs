//! Interactive surface: sequential prompts, same composer underneath.

use std::borrow::Cow;
use std::path::PathBuf;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal};

use crate::color::Rgb;
use crate::composer::{self, RenderRequest, DEFAULT_OUTPUT};
use crate::errors::Result;
use crate::presets::{self, Theme, STYLES, THEMES};

/// Single-question prompt.
struct AskPrompt {
    label: String,
}

impl Prompt for AskPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("\x1b[32m❯\x1b[0m ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("··· ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("search: ")
    }
}

/// Read one trimmed line; `None` means the user aborted (Ctrl-C/Ctrl-D).
fn ask(editor: &mut Reedline, label: &str) -> Result<Option<String>> {
    let prompt = AskPrompt {
        label: format!("{label} "),
    };
    match editor.read_line(&prompt)? {
        Signal::Success(line) => Ok(Some(line.trim().to_string())),
        Signal::CtrlC | Signal::CtrlD => Ok(None),
    }
}

/// Run the interactive flow to completion or graceful abort.
///
/// Empty data aborts with nothing written; preset questions fall back to
/// their defaults on any unrecognized answer.
pub fn run() -> Result<()> {
    let mut editor = Reedline::create();
    let rule = "═".repeat(50);

    println!("{rule}");
    println!("🔳 QR Code Generator");
    println!("{rule}");

    let Some(data) = ask(&mut editor, "📝 Text or URL to encode:")? else {
        return abort();
    };
    if data.is_empty() {
        return abort();
    }

    println!();
    println!("🎨 Themes:");
    for theme in &THEMES {
        println!("  {} - {}", theme.key, theme.name);
    }
    println!("  9 - 🎛  Custom colors");
    let Some(theme_choice) = ask(&mut editor, "Theme [5]:")? else {
        return abort();
    };
    let theme = if presets::normalize_key(&theme_choice) == "9" {
        let Some(fill) = ask(&mut editor, "Fill color hex (e.g. #7F00FF):")? else {
            return abort();
        };
        let Some(back) = ask(&mut editor, "Background color hex (e.g. #FFFFFF):")? else {
            return abort();
        };
        Theme::custom(Rgb::from_hex(&fill)?, Rgb::from_hex(&back)?)
    } else {
        Theme::from(presets::resolve_theme(&theme_choice))
    };

    println!();
    println!("🔲 Styles:");
    for style in &STYLES {
        println!("  {} - {}", style.key, style.name);
    }
    let Some(style_choice) = ask(&mut editor, "Style [1]:")? else {
        return abort();
    };
    let style = *presets::resolve_style(&style_choice);

    println!();
    let Some(logo) = ask(&mut editor, "🖼  Logo path (empty for none):")? else {
        return abort();
    };
    let logo = strip_quotes(&logo);
    let logo_path = (!logo.is_empty()).then(|| PathBuf::from(logo));

    let Some(output) = ask(&mut editor, "💾 Output filename [qr_code.png]:")? else {
        return abort();
    };
    let output = if output.is_empty() {
        DEFAULT_OUTPUT.to_string()
    } else {
        output
    };

    let request = RenderRequest::new(data, theme, style, logo_path, output)?;

    println!();
    println!("🎨 Theme: {}", request.theme.name);
    println!("🔲 Style: {}", request.style.name);

    let saved = composer::compose(&request)?;

    println!();
    println!("✅ SUCCESS! QR code saved as: {}", saved.display());
    println!("{rule}");
    Ok(())
}

fn abort() -> Result<()> {
    println!("\x1b[90mNothing to encode, no file written 👋\x1b[0m");
    Ok(())
}

/// Strip one pair of surrounding quotes; pasted paths often carry them.
fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .or_else(|| {
            s.strip_prefix('\'')
                .and_then(|inner| inner.strip_suffix('\''))
        })
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_quotes() {
        assert_eq!(strip_quotes("\"/tmp/logo.png\""), "/tmp/logo.png");
        assert_eq!(strip_quotes("'/tmp/logo.png'"), "/tmp/logo.png");
        assert_eq!(strip_quotes("  /tmp/logo.png "), "/tmp/logo.png");
        assert_eq!(strip_quotes("\"unbalanced"), "\"unbalanced");
        assert_eq!(strip_quotes(""), "");
    }
}
