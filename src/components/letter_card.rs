//! Card for a single letter on the dashboard grid.
//!
//! DESIGN
//! ======
//! The card body is a plain link to the editor. The delete button sits next
//! to the link, not inside it, and hands the id back to the page, which owns
//! the confirmation flow.

#[cfg(test)]
#[path = "letter_card_test.rs"]
mod letter_card_test;

use leptos::prelude::*;

use crate::net::types::Letter;
use crate::state::editor::editor_path;
use crate::util::dates::display_date;

const EXCERPT_CHARS: usize = 140;

/// First `max_chars` characters of `content` on a single line, with an
/// ellipsis when truncated.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

/// Last-modified line, falling back to the creation date.
pub fn updated_label(letter: &Letter) -> String {
    let date = display_date(letter.updated_at.as_deref().or(letter.created_at.as_deref()));
    format!("Updated {date}")
}

#[component]
pub fn LetterCard(letter: Letter, on_delete: Callback<String>) -> impl IntoView {
    let href = editor_path(&letter.id);
    let synced = letter.is_synced();
    let updated = updated_label(&letter);
    let preview = excerpt(&letter.content, EXCERPT_CHARS);
    let id = letter.id;

    view! {
        <article class="letter-card" class:letter-card--synced=synced>
            <a class="letter-card__link" href=href>
                <span class="letter-card__title">{letter.title}</span>
                <Show when=move || synced>
                    <span class="chip chip--drive">"Saved to Drive"</span>
                </Show>
                <span class="letter-card__excerpt">{preview}</span>
                <span class="letter-card__meta">{updated}</span>
            </a>
            <button
                class="letter-card__delete"
                on:click=move |_| on_delete.run(id.clone())
                title="Delete letter"
                aria-label="Delete letter"
            >
                "✕"
            </button>
        </article>
    }
}
