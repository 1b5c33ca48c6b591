//! Text rendering of query results. Callers pass collections whose
//! relations were already eagerly fetched, so formatting never touches
//! the database.

use std::fmt::Write;

use crate::models::autor::AutorAmbLlibres;
use crate::models::llibre::LlibreAmbAutors;

/// One book per line, authors included.
pub fn format_llibres(items: &[LlibreAmbAutors]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{}", item);
    }
    out
}

/// One author per line, books included.
pub fn format_autors(items: &[AutorAmbLlibres]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{}", item);
    }
    out
}

/// Render rows of paired columns as `[a, b]`, one row per line.
pub fn format_pairs(rows: &[(String, String)]) -> String {
    let mut out = String::new();
    for (a, b) in rows {
        let _ = writeln!(out, "[{}, {}]", a, b);
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::models::{autor, llibre};

    use super::*;

    fn llibre(id: i32, titol: &str) -> llibre::Model {
        llibre::Model {
            llibre_id: id,
            isbn: format!("978-{}", id),
            titol: titol.to_string(),
            editorial: "Gallimard".to_string(),
            any_publicacio: 1947,
        }
    }

    fn autor(id: i32, nom: &str) -> autor::Model {
        autor::Model {
            autor_id: id,
            nom: nom.to_string(),
        }
    }

    #[test]
    fn format_pairs_brackets_each_row() {
        let rows = vec![
            ("La Pesta".to_string(), "Joan".to_string()),
            ("L'Estrany".to_string(), "Anna".to_string()),
        ];
        assert_eq!(
            format_pairs(&rows),
            "[La Pesta, Joan]\n[L'Estrany, Anna]\n"
        );
    }

    #[test]
    fn format_pairs_empty_is_empty() {
        assert_eq!(format_pairs(&[]), "");
    }

    #[test]
    fn format_llibres_lists_authors() {
        let items = vec![LlibreAmbAutors {
            llibre: llibre(1, "La Pesta"),
            autors: vec![autor(1, "A. Camus")],
        }];
        let text = format_llibres(&items);
        assert!(text.contains("titol='La Pesta'"));
        assert!(text.contains("autors={A. Camus}"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn format_autors_omits_empty_book_set() {
        let items = vec![AutorAmbLlibres {
            autor: autor(2, "M. Rodoreda"),
            llibres: vec![],
        }];
        let text = format_autors(&items);
        assert!(text.contains("nom='M. Rodoreda'"));
        assert!(!text.contains("llibres="));
    }
}
