//! End-to-end behaviour of the substitution module, driven with parsed IRC
//! lines the way the session feeds it.

use minised::irc::{IrcLine, Outgoing};
use minised::{Event, Handled, MiniSed, config::ModuleConfig};

struct Harness {
    module: MiniSed,
    outbox: Vec<Outgoing>,
}

impl Harness {
    fn new() -> Self {
        Self {
            module: MiniSed::new(ModuleConfig::default()),
            outbox: Vec::new(),
        }
    }

    fn say(&mut self, nick: &str, channel: &str, text: &str) -> Handled {
        let raw = format!(":{nick}!{nick}@test.host PRIVMSG {channel} :{text}");
        let line: IrcLine = raw.parse().expect("valid line");
        self.module.handle(&Event::from_line(&line), &mut self.outbox)
    }

    fn take_output(&mut self) -> Vec<String> {
        self.outbox.drain(..).map(|m| m.to_string()).collect()
    }

    fn last_line(&self, channel: &str) -> Option<&str> {
        self.module.state().last_line(channel)
    }
}

#[test]
fn test_substitution_and_chaining() {
    let mut h = Harness::new();

    h.say("Tester", "#test", "Hello foo!");
    assert!(h.take_output().is_empty());

    h.say("Tester", "#test", "s/foo/baz/");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :Hello baz!"]);

    // Operates on the already substituted line.
    h.say("Tester", "#test", "s/z/r/");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :Hello bar!"]);
    assert_eq!(h.last_line("#test"), Some("Hello bar!"));
}

#[test]
fn test_unknown_channel_is_silent() {
    let mut h = Harness::new();
    h.say("Tester", "#other", "Hello foo!");

    assert_eq!(h.say("Tester", "#test", "s/foo/bar/"), Handled::Recorded);
    assert!(h.take_output().is_empty());
    // The command itself becomes the last line, nothing was substituted.
    assert_eq!(h.last_line("#test"), Some("s/foo/bar/"));
    assert_eq!(h.last_line("#other"), Some("Hello foo!"));
}

#[test]
fn test_invalid_regex_is_silent() {
    let mut h = Harness::new();
    h.say("Tester", "#test", "Hello foo!");
    h.say("Tester", "#test", "s/[/x/");
    assert!(h.take_output().is_empty());
}

#[test]
fn test_flags_and_backreferences() {
    let mut h = Harness::new();

    h.say("alice", "#test", "HELLO world");
    h.say("bob", "#test", "s/hello/goodbye/i/");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :goodbye world"]);

    h.say("bob", "#test", r"s/(\w+) (\w+)/$2 $1/");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :world goodbye"]);

    h.say("bob", "#test", "s/o/0//");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :w0rld g00dbye"]);
}

#[test]
fn test_unsupported_flag_is_silent() {
    let mut h = Harness::new();
    h.say("alice", "#test", "aaa");
    h.say("bob", "#test", "s/a/b/g/");
    assert!(h.take_output().is_empty());
}

#[test]
fn test_alternative_and_escaped_delimiters() {
    let mut h = Harness::new();

    h.say("alice", "#test", "see http://example.com/a/b");
    h.say("bob", "#test", "s|example.com|example.org|");
    assert_eq!(
        h.take_output(),
        vec!["PRIVMSG #test :see http://example.org/a/b"]
    );

    h.say("bob", "#test", r"S/a\/b/c/");
    assert_eq!(
        h.take_output(),
        vec!["PRIVMSG #test :see http://example.org/c"]
    );
}

#[test]
fn test_degenerate_pattern_is_silent() {
    let mut h = Harness::new();
    h.say("alice", "#test", "^^^ look up");
    h.say("bob", "#test", "s/^^^/v/");
    assert!(h.take_output().is_empty());
}

#[test]
fn test_any_speaker_can_correct() {
    let mut h = Harness::new();
    h.say("alice", "#test", "teh quick fox");
    h.say("bob", "#test", "s/teh/the/");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :the quick fox"]);
}

#[test]
fn test_ctcp_action_is_not_recorded() {
    let mut h = Harness::new();
    h.say("alice", "#test", "Hello foo!");
    assert_eq!(
        h.say("alice", "#test", "\x01ACTION waves\x01"),
        Handled::Ignored
    );
    h.say("bob", "#test", "s/foo/baz/");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :Hello baz!"]);
}

#[test]
fn test_help_request() {
    let mut h = Harness::new();
    assert_eq!(h.say("alice", "#test", "!help MiniSed"), Handled::Help);
    let out = h.take_output();
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("PRIVMSG #test :"));
    assert!(out[0].contains("s/regexp/replacement/"));

    assert_eq!(h.say("alice", "minised", "!help minised"), Handled::Help);
    let out = h.take_output();
    assert!(out[0].starts_with("PRIVMSG alice :"));
}

#[test]
fn test_growing_line_stops_at_one_message() {
    let mut h = Harness::new();
    let start = "a".repeat(400);
    h.say("alice", "#test", &start);

    let grow = format!("s/a/{}/", "a".repeat(490));
    assert_eq!(h.say("mallory", "#test", &grow), Handled::Recorded);
    assert!(h.take_output().is_empty());
    // The rejected command is recorded like any other line.
    assert_eq!(h.last_line("#test"), Some(grow.as_str()));

    h.say("mallory", "#test", &grow);
    assert!(h.take_output().is_empty());
    assert!(h.last_line("#test").is_some_and(|l| l.len() < 512));
}

#[test]
fn test_escaped_angle_bracket_delimiter() {
    let mut h = Harness::new();
    h.say("alice", "#test", "if a<b then");
    h.say("bob", "#test", r"s<a\<b<a > b<");
    assert_eq!(h.take_output(), vec!["PRIVMSG #test :if a > b then"]);
}
