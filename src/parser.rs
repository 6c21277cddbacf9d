use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::model::*;

pub fn parse_deck(content: &str, deck_file: &str, deck_hash: &str) -> Result<Deck, String> {
    let (frontmatter, body) = split_frontmatter(content)?;
    let fm: Frontmatter =
        serde_yaml::from_str(&frontmatter).map_err(|e| format!("Invalid frontmatter: {}", e))?;

    let (title, intro, questions) = parse_body(&body)?;

    if questions.is_empty() {
        return Err("Deck contains no questions".to_string());
    }
    if fm.mode == DeckMode::Check && questions.len() != 1 {
        return Err(format!(
            "Check decks must contain exactly one question, found {}",
            questions.len()
        ));
    }
    if let Some(mark) = fm.pass_mark {
        if mark > 100 {
            return Err(format!("pass_mark must be 0-100, got {}", mark));
        }
    }

    let title = fm.title.clone().unwrap_or(title);

    Ok(Deck {
        frontmatter: fm,
        title,
        intro,
        questions,
        deck_file: deck_file.to_string(),
        deck_hash: deck_hash.to_string(),
    })
}

fn split_frontmatter(content: &str) -> Result<(String, String), String> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return Err("Deck file must start with YAML frontmatter (---)".to_string());
    }

    let after_first = &trimmed[3..];
    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| "No closing --- for frontmatter".to_string())?;

    let fm = after_first[..end_pos].trim().to_string();
    let body = after_first[end_pos + 4..].to_string();

    Ok((fm, body))
}

fn parse_body(body: &str) -> Result<(String, Vec<String>, Vec<Question>), String> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(body, opts);
    let events: Vec<Event> = parser.collect();

    let mut title = String::new();
    let mut intro: Vec<String> = Vec::new();
    let mut questions: Vec<Question> = Vec::new();

    let mut in_h1 = false;
    let mut in_h2 = false;
    let mut current_h2_text = String::new();
    let mut seen_h2 = false;

    let mut current_prompt_extra: Vec<String> = Vec::new();
    let mut current_options: Vec<(String, bool)> = Vec::new();
    let mut current_explanation = String::new();
    let mut in_blockquote = false;
    let mut in_list_item = false;
    let mut list_item_text = String::new();
    let mut task_list_checked: Option<bool> = None;
    let mut in_paragraph = false;
    let mut paragraph_text = String::new();

    for event in &events {
        match event {
            Event::Start(Tag::Heading { level, .. }) => match level {
                pulldown_cmark::HeadingLevel::H1 => {
                    in_h1 = true;
                }
                pulldown_cmark::HeadingLevel::H2 => {
                    if seen_h2 {
                        finalize_question(
                            &current_h2_text,
                            &mut questions,
                            &mut current_prompt_extra,
                            &mut current_options,
                            &mut current_explanation,
                        )?;
                    }
                    in_h2 = true;
                    current_h2_text = String::new();
                    seen_h2 = true;
                }
                _ => {}
            },
            Event::End(TagEnd::Heading(level)) => match level {
                pulldown_cmark::HeadingLevel::H1 => {
                    in_h1 = false;
                }
                pulldown_cmark::HeadingLevel::H2 => {
                    in_h2 = false;
                }
                _ => {}
            },
            Event::Start(Tag::BlockQuote(_)) => {
                in_blockquote = true;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                in_blockquote = false;
            }
            Event::Start(Tag::List(_)) => {}
            Event::End(TagEnd::List(_)) => {}
            Event::Start(Tag::Item) => {
                in_list_item = true;
                list_item_text = String::new();
                task_list_checked = None;
            }
            Event::End(TagEnd::Item) => {
                in_list_item = false;
                if seen_h2 {
                    if let Some(checked) = task_list_checked {
                        current_options.push((list_item_text.trim().to_string(), checked));
                    }
                }
                task_list_checked = None;
            }
            Event::TaskListMarker(checked) => {
                task_list_checked = Some(*checked);
            }
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                paragraph_text = String::new();
            }
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                let text = paragraph_text.trim().to_string();
                if text.is_empty() {
                    continue;
                }
                if in_blockquote {
                    if seen_h2 {
                        if !current_explanation.is_empty() {
                            current_explanation.push('\n');
                        }
                        current_explanation.push_str(&text);
                    }
                } else if !seen_h2 && !in_h1 {
                    intro.push(text);
                } else if seen_h2 {
                    current_prompt_extra.push(text);
                }
            }
            Event::Text(text) => {
                let t = text.to_string();
                if in_h1 {
                    title = t;
                } else if in_h2 {
                    current_h2_text.push_str(&t);
                } else if in_list_item {
                    list_item_text.push_str(&t);
                } else if in_paragraph {
                    paragraph_text.push_str(&t);
                }
            }
            Event::Code(code) => {
                let c = format!("`{}`", code);
                if in_h2 {
                    current_h2_text.push_str(&c);
                } else if in_list_item {
                    list_item_text.push_str(&c);
                } else if in_paragraph {
                    paragraph_text.push_str(&c);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_paragraph {
                    paragraph_text.push(' ');
                } else if in_list_item {
                    list_item_text.push(' ');
                }
            }
            _ => {}
        }
    }

    if seen_h2 {
        finalize_question(
            &current_h2_text,
            &mut questions,
            &mut current_prompt_extra,
            &mut current_options,
            &mut current_explanation,
        )?;
    }

    Ok((title, intro, questions))
}

fn finalize_question(
    h2_text: &str,
    questions: &mut Vec<Question>,
    prompt_extra: &mut Vec<String>,
    options: &mut Vec<(String, bool)>,
    explanation: &mut String,
) -> Result<(), String> {
    let (number, mut prompt) = parse_h2_title(h2_text)?;

    for extra in prompt_extra.drain(..) {
        prompt.push('\n');
        prompt.push_str(&extra);
    }

    let opts = std::mem::take(options);
    let marked: Vec<usize> = opts
        .iter()
        .enumerate()
        .filter(|(_, (_, checked))| *checked)
        .map(|(i, _)| i)
        .collect();

    let correct = match marked.as_slice() {
        [idx] => *idx,
        [] => {
            return Err(format!(
                "Question {} has no option marked correct (use '- [x]')",
                number
            ))
        }
        _ => {
            return Err(format!(
                "Question {} marks {} options correct; exactly one is required",
                number,
                marked.len()
            ))
        }
    };

    let expl = std::mem::take(explanation);
    let explanation = if expl.trim().is_empty() {
        None
    } else {
        Some(expl.trim().to_string())
    };

    let option_texts: Vec<String> = opts.into_iter().map(|(text, _)| text).collect();
    questions.push(Question::new(number, prompt, option_texts, correct, explanation)?);

    Ok(())
}

fn parse_h2_title(text: &str) -> Result<(u32, String), String> {
    let trimmed = text.trim();
    // Expected format: "1. Prompt text"
    if let Some(dot_pos) = trimmed.find('.') {
        let num_str = trimmed[..dot_pos].trim();
        let prompt = trimmed[dot_pos + 1..].trim().to_string();
        let number: u32 = num_str
            .parse()
            .map_err(|_| format!("Invalid question number in heading: {}", trimmed))?;
        Ok((number, prompt))
    } else {
        Err(format!(
            "Question heading must be in format '## N. Prompt', got: {}",
            trimmed
        ))
    }
}
