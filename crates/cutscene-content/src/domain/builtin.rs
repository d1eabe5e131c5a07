//! The script shipped with the engine.

use std::time::Duration;

use cutscene_core::content::ContentSource;
use cutscene_core::script::{Actor, DialogueLine, StoryPassage};

const PASSAGE_DELAY: Duration = Duration::from_millis(1500);

const INTRO: [&str; 6] = [
    "📜 오래 전, 데이터 왕국은 평화로웠다...",
    "하지만, 갑자기 데이터 흐름이 끊기고 왕국은 혼돈에 빠졌다!",
    "데이터를 정화하고 원래 상태로 되돌릴 유일한 방법은...",
    "'Combine 마법'을 깨우는 것뿐!",
    "🔥 당신은 이제 초급 모험가로서 첫걸음을 내딛는다!",
    "Publisher와 Subscriber의 힘을 배워 데이터를 복구해야 한다!",
];

const WIZARD: [&str; 3] = [
    "이곳에 데이터의 흐름이 어지럽혀지고 있어...",
    "데이터가 흘러야 하는데... 네가 이를 막고 있군!",
    "Combine 마법으로 네 정체를 밝혀주마!",
];

const MONSTER: [&str; 2] = [
    "하하하! 나는 '끊어진 스트림'! 데이터를 막는 자다!",
    "Publisher가 데이터를 보내도, 난 절대 Subscriber에게 넘기지 않지!",
];

/// Built-in intro story and encounter dialogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn intro_story(&self) -> Vec<StoryPassage> {
        INTRO
            .iter()
            .map(|text| StoryPassage::new(*text, PASSAGE_DELAY))
            .collect()
    }

    fn dialogue(&self, actor: Actor) -> Vec<DialogueLine> {
        let lines: &[&str] = match actor {
            Actor::Wizard => &WIZARD,
            Actor::Monster => &MONSTER,
        };
        DialogueLine::for_actor(actor, lines.iter().copied())
    }
}
