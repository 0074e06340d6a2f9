//! Built-in English bundle.

use facilitator_types::{Language, LexiconSource, owned_list};

const SKIP_DIRECTIVES: &[&str] = &[
    "skip",
    "skip it",
    "skip this",
    "skip that",
    "next",
    "next one",
    "next question",
    "move on",
    "moving on",
    "pass",
    "continue",
    "carry on",
];

const REQUEST_FRAMES: &[&str] = &[
    "can we",
    "could we",
    "can i",
    "could i",
    "can you",
    "could you",
    "may i",
    "may we",
    "let's",
    "lets",
    "let us",
    "let me",
    "please",
    "i want to",
    "i wanna",
    "i'd like to",
    "i would like to",
    "i'd rather",
    "i would rather",
    "i prefer to",
    "i'd prefer to",
    "i'll",
    "i will",
    "i'm going to",
    "gonna",
    "we can",
    "maybe we can",
    "just",
    "ok",
    "okay",
    "so",
];

const COURTESY_WORDS: &[&str] = &[
    "please",
    "pls",
    "plz",
    "now",
    "right now",
    "for now",
    "for today",
    "today",
    "then",
    "already",
    "thanks",
    "thank you",
    "ok",
    "okay",
];

const SKIP_TARGETS: &[&str] = &[
    "it",
    "this",
    "that",
    "one",
    "this one",
    "that one",
    "question",
    "this question",
    "that question",
    "the question",
    "step",
    "this step",
    "part",
    "this part",
    "the task",
    "this task",
    "ahead",
    "forward",
    "the next",
    "the next one",
    "the next question",
    "to the next",
    "to the next one",
    "to the next question",
    "to the next step",
    "to the next part",
    "to something else",
];

const CLARIFICATION_REQUESTS: &[&str] = &[
    "can you explain",
    "could you explain",
    "would you explain",
    "please explain",
    "explain again",
    "explain it again",
    "explain that again",
    "explain more",
    "can you repeat",
    "could you repeat",
    "please repeat",
    "repeat that",
    "repeat the question",
    "repeat please",
    "say that again",
    "say it again",
    "come again",
    "can you rephrase",
    "could you rephrase",
    "please rephrase",
    "rephrase that",
    "rephrase the question",
    "can you clarify",
    "could you clarify",
    "please clarify",
    "clarify please",
    "can you elaborate",
    "could you elaborate",
    "what do you mean",
    "what does that mean",
    "what does it mean",
    "i didn't get the question",
    "i don't get the question",
    "i didn't understand the question",
    "i don't understand the question",
];

const UNCERTAINTY: &[&str] = &[
    "not sure",
    "i'm not sure",
    "im not sure",
    "i am not sure",
    "unsure",
    "not certain",
    "i'm not certain",
    "don't know",
    "dont know",
    "do not know",
    "i don't know",
    "i dont know",
    "i do not know",
    "dunno",
    "idk",
    "no idea",
    "have no idea",
    "i have no idea",
    "no clue",
    "have no clue",
    "i have no clue",
    "confused",
    "i'm confused",
    "i am confused",
    "i'm lost",
    "not clear",
    "unclear",
    "it's not clear",
    "it is not clear",
    "don't understand",
    "i don't understand",
    "i do not understand",
    "hard to say",
    "can't tell",
    "i can't tell",
    "can't say",
    "i can't say",
];

const HEDGES: &[&str] = &[
    "yet",
    "still",
    "really",
    "at all",
    "exactly",
    "quite",
    "truly",
    "genuinely",
    "totally",
    "completely",
    "absolutely",
    "seriously",
    "kind of",
    "kinda",
    "for sure",
    "though",
    "right now",
    "now",
    "either",
    "anymore",
    "about it",
    "about that",
    "about this",
    "sorry",
    "haha",
    "lol",
];

const FILLERS: &[&str] = &[
    "um",
    "umm",
    "uh",
    "uhh",
    "hmm",
    "hmmm",
    "mm",
    "oh",
    "eh",
    "ah",
    "er",
    "well",
    "so",
    "honestly",
    "to be honest",
    "actually",
    "basically",
    "ok",
    "okay",
    "yeah",
    "yes",
    "like",
    "i",
    "i'm",
    "im",
    "me",
    "just",
];

const CONNECTORS: &[&str] = &[
    "maybe",
    "but",
    "perhaps",
    "probably",
    "possibly",
    "i guess",
    "guess",
    "i think",
    "i suppose",
    "might be",
    "it might be",
    "could be",
    "it could be",
    "although",
    "though",
    "except",
    "mostly",
    "mainly",
];

const INTERROGATIVES: &[&str] = &[
    "what",
    "what's",
    "whats",
    "what exactly",
    "what now",
    "how",
    "why",
    "which",
    "where",
    "when",
    "who",
    "huh",
];

const TASK_REFERENCES: &[&str] = &[
    "task",
    "the task",
    "exercise",
    "the exercise",
    "assignment",
    "the assignment",
    "question",
    "the question",
    "step",
    "next step",
    "to do",
    "what to do",
    "you mean",
    "you want",
];

const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "to", "of", "in", "on", "at", "for", "with", "from", "about", "by", "as",
    "and", "or", "if", "then", "than", "so", "up", "out", "is", "am", "are", "was", "were", "be",
    "been", "it", "it's", "its", "this", "that", "these", "those", "there", "here", "my", "your",
    "our", "their", "his", "her", "me", "you", "i", "we", "us", "he", "she", "they", "them",
    "do", "does", "did", "have", "has", "had", "can", "will", "would", "should", "could", "not",
    "no", "any", "some", "all", "very", "too", "also", "just", "really",
];

const TASK_HELP: &[&str] = &[
    "how do i",
    "how should i",
    "how can i",
    "i can't do this",
    "i can't do it",
    "i can't think of",
    "i can't figure",
    "i can't come up with",
    "i cannot do this",
    "i cannot think of",
    "can't do",
    "i'm stuck",
    "stuck",
    "help",
    "help me",
    "need help",
    "i don't know what to write",
    "what should i write",
    "what to write",
    "what to do",
    "what do i do",
    "where do i start",
    "where to start",
    "give me an example",
    "give an example",
    "example please",
    "is there an example",
    "is there a template",
    "give me a template",
    "too hard",
    "too difficult",
];

const COMPLETION: &[&str] = &[
    "done",
    "i'm done",
    "im done",
    "i am done",
    "all done",
    "finished",
    "i finished",
    "i've finished",
    "i have finished",
    "i'm finished",
    "completed",
    "i completed",
    "i did it",
    "did it",
    "i wrote it",
    "wrote it",
    "here it is",
    "here's what i wrote",
    "here is what i wrote",
    "here you go",
    "that's it",
];

const CHECKIN: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "hiya",
    "good morning",
    "good afternoon",
    "good evening",
    "morning",
    "ready",
    "i'm ready",
    "im ready",
    "i am ready",
    "let's start",
    "lets start",
    "let's go",
    "lets go",
    "let's begin",
    "start",
    "yes",
    "yeah",
    "yep",
    "sure",
    "ok",
    "okay",
    "here",
    "i'm here",
];

const BANNED_PHRASES: &[&str] = &[
    "great question",
    "that's a great question",
    "what a great question",
    "as an ai",
    "as an ai language model",
    "as a language model",
    "i'm just an ai",
    "i hope this helps",
    "i hope that helps",
    "feel free to",
    "don't hesitate to",
    "it's important to note",
    "it is important to note",
    "let's dive in",
    "let's dive into",
    "deep dive",
    "journey of self-discovery",
    "safe space",
    "i totally understand",
    "i completely understand",
];

pub(super) fn source() -> LexiconSource {
    LexiconSource {
        language: Language::ENGLISH,
        skip_directives: owned_list(SKIP_DIRECTIVES),
        request_frames: owned_list(REQUEST_FRAMES),
        courtesy_words: owned_list(COURTESY_WORDS),
        skip_targets: owned_list(SKIP_TARGETS),
        clarification_requests: owned_list(CLARIFICATION_REQUESTS),
        uncertainty: owned_list(UNCERTAINTY),
        hedges: owned_list(HEDGES),
        fillers: owned_list(FILLERS),
        connectors: owned_list(CONNECTORS),
        interrogatives: owned_list(INTERROGATIVES),
        task_references: owned_list(TASK_REFERENCES),
        function_words: owned_list(FUNCTION_WORDS),
        task_help: owned_list(TASK_HELP),
        completion: owned_list(COMPLETION),
        checkin: owned_list(CHECKIN),
        banned_phrases: owned_list(BANNED_PHRASES),
    }
}
