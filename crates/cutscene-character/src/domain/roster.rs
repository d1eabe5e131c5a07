//! The fixed roster of playable characters.

use serde::Serialize;

/// Balloon text shown while no character is selected.
pub const DEFAULT_BALLOON_TEXT: &str = "기본문법 정복하러 가자!";

/// A playable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Roster index.
    pub id: u8,
    /// Display name.
    pub name: &'static str,
    /// Balloon text shown once selected.
    pub description: &'static str,
}

/// Every character, ordered by `id`.
pub const ROSTER: [Character; 3] = [
    Character {
        id: 0,
        name: "초딩",
        description: "초딩 캐릭터 선택! 기본기를 다져보자!",
    },
    Character {
        id: 1,
        name: "중딩",
        description: "중딩 캐릭터 선택! 한 단계 레벨업!",
    },
    Character {
        id: 2,
        name: "고딩",
        description: "고딩 캐릭터 선택! 실전으로 가보자!",
    },
];

/// Looks up a character by roster index.
#[must_use]
pub fn character(index: u8) -> Option<&'static Character> {
    ROSTER.get(usize::from(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_match_positions() {
        for (position, character) in ROSTER.iter().enumerate() {
            assert_eq!(usize::from(character.id), position);
        }
    }

    #[test]
    fn test_character_lookup_out_of_range() {
        assert_eq!(character(1).map(|c| c.name), Some("중딩"));
        assert!(character(3).is_none());
    }
}
