//! Shot-row normalization and per-scene renumbering.

use page2prompt_codec::PipeRow;
use page2prompt_core::Shot;

/// Convert parsed rows into shots and renumber them.
///
/// Missing fields read as empty strings; nothing here fails. The incoming
/// `shot` column is ignored because numbering is derived.
///
/// # Examples
///
/// ```
/// use page2prompt_codec::{SHOT_FIELDS, parse_pipe_rows};
/// use page2prompt_shots::normalize;
///
/// let text = "0:01|1|9|a|b|Wide|Ann|Dock\n0:02|1|9|c|d|Wide|Ann|Dock";
/// let shots = normalize(&parse_pipe_rows(text, &SHOT_FIELDS).rows);
/// assert_eq!(shots.iter().map(|s| s.shot).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn normalize(rows: &[PipeRow]) -> Vec<Shot> {
    let mut shots: Vec<Shot> = rows
        .iter()
        .map(|row| Shot {
            timestamp: row.get("timestamp").to_string(),
            scene: row.get("scene").to_string(),
            shot: 0,
            reference: row.get("reference").to_string(),
            description: row.get("description").to_string(),
            size: row.get("size").to_string(),
            people: row.get("people").to_string(),
            places: row.get("places").to_string(),
            directors_notes: None,
        })
        .collect();
    renumber(&mut shots);
    shots
}

/// Reassign `shot` so every run of rows sharing a scene counts `1..=N`.
///
/// A new run starts whenever the scene label differs from the previous
/// row's. Labels are compared as strings. Must run over rows in document
/// order.
pub fn renumber(shots: &mut [Shot]) {
    let Some(first) = shots.first() else {
        return;
    };

    let mut current_scene = first.scene.clone();
    let mut counter = 1u32;

    for shot in shots.iter_mut() {
        if shot.scene != current_scene {
            current_scene = shot.scene.clone();
            counter = 1;
        }
        shot.shot = counter;
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(scene: &str) -> Shot {
        Shot {
            scene: scene.to_string(),
            shot: 99,
            ..Default::default()
        }
    }

    fn numbers(shots: &[Shot]) -> Vec<u32> {
        shots.iter().map(|s| s.shot).collect()
    }

    #[test]
    fn test_scene_repeat_then_change() {
        let mut shots = vec![shot("1"), shot("1"), shot("2")];
        renumber(&mut shots);
        assert_eq!(numbers(&shots), vec![1, 2, 1]);
    }

    #[test]
    fn test_returning_scene_starts_new_run() {
        let mut shots = vec![shot("A"), shot("B"), shot("B"), shot("A")];
        renumber(&mut shots);
        assert_eq!(numbers(&shots), vec![1, 1, 2, 1]);
    }

    #[test]
    fn test_empty_input_unchanged() {
        let mut shots: Vec<Shot> = Vec::new();
        renumber(&mut shots);
        assert!(shots.is_empty());
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_single_empty_scene_is_one_scene() {
        let mut shots = vec![shot(""), shot("")];
        renumber(&mut shots);
        assert_eq!(numbers(&shots), vec![1, 2]);
    }

    #[test]
    fn test_missing_columns_read_empty() {
        let rows = vec![PipeRow::from_pairs([("scene", "3"), ("people", "Ann")])];
        let shots = normalize(&rows);
        assert_eq!(shots[0].timestamp, "");
        assert_eq!(shots[0].people, "Ann");
        assert_eq!(shots[0].shot, 1);
    }
}
