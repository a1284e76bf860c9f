use assert_cmd::Command;
use predicates::prelude::*;

fn contacts(script: &'static str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("contacts")
        .unwrap()
        .write_stdin(script)
        .assert()
        .success()
}

#[test]
fn add_and_display() {
    contacts("add Bob 111 b@x.com\nadd alice 222 a@x.com\ndisplay\n").stdout(
        "Added: Bob\n\
         Added: alice\n\
         Contacts:\n\
         alice | 222 | a@x.com\n\
         Bob | 111 | b@x.com\n",
    );
}

#[test]
fn duplicate_add() {
    contacts("add Amy 1 a@x.com\nadd Amy 2 b@x.com\nsearch Amy\n").stdout(
        "Added: Amy\n\
         Contact 'Amy' already exists.\n\
         Found: Amy | 1 | a@x.com\n",
    );
}

#[test]
fn empty_fields_are_rejected() {
    contacts("add Ann \"\" a@x.com\ndisplay\n").stdout(
        "Error: Name, phone, and email cannot be empty.\n\
         Contact book is empty.\n",
    );
}

#[test]
fn quoted_names() {
    contacts("add \"Ann Lee\" 1 a@x.com\nsearch \"Ann Lee\"\n").stdout(
        "Added: Ann Lee\n\
         Found: Ann Lee | 1 | a@x.com\n",
    );
}

#[test]
fn empty_book() {
    contacts("display\n").stdout("Contact book is empty.\n");
}

#[test]
fn delete_last_contact() {
    contacts("add Zoe 9 z@x.com\ndelete Zoe\ndisplay\nsearch Zoe\ndelete Zoe\n").stdout(
        "Added: Zoe\n\
         Deleted: Zoe\n\
         Contact book is empty.\n\
         Contact 'Zoe' not found.\n\
         Contact 'Zoe' not found.\n",
    );
}

#[test]
fn update_fields() {
    contacts(
        "add Ann 1 a@x.com\n\
         update Ann --phone 2\n\
         update Ann --email ann@x.com\n\
         update Ben --phone 3\n",
    )
    .stdout(
        "Added: Ann\n\
         Updated: Ann | 2 | a@x.com\n\
         Updated: Ann | 2 | ann@x.com\n\
         Contact 'Ben' not found.\n",
    );
}

#[test]
fn blank_lines_are_skipped() {
    contacts("\n   \nadd Ann 1 a@x.com\n\n").stdout("Added: Ann\n");
}

#[test]
fn quit_stops_reading() {
    contacts("add Ann 1 a@x.com\nquit\nadd Ben 2 b@x.com\n").stdout("Added: Ann\n");
}

#[test]
fn malformed_command_keeps_shell_running() {
    contacts("add Ann\nfrobnicate\ndisplay\n")
        .stdout(predicate::str::contains("error:"))
        .stdout(predicate::str::ends_with("Contact book is empty.\n"));
}

#[test]
fn help_lists_commands() {
    contacts("help\n")
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("display"));
}

#[test]
fn verbose_logs_to_stderr() {
    Command::cargo_bin("contacts")
        .unwrap()
        .arg("--verbose")
        .write_stdin("add Ann 1 a@x.com\n")
        .assert()
        .success()
        .stdout("Added: Ann\n")
        .stderr(predicate::str::contains("added contact"));
}

#[test]
fn quiet_by_default() {
    contacts("add Ann 1 a@x.com\n").stderr(predicate::str::is_empty());
}

#[test]
fn unterminated_quote_is_an_error() {
    contacts("add Ann 1 a@x.com\nsearch \"Ann\ndisplay\n").stdout(
        "Added: Ann\n\
         error: missing closing quote\n\
         Contacts:\n\
         Ann | 1 | a@x.com\n",
    );
}

#[test]
fn quotes_inside_a_word_join_its_parts() {
    contacts("add \"Ann\"' Lee' 1 a@x.com\nsearch 'Ann Lee'\nsearch \"Ann \\\"Al\\\" Lee\"\n").stdout(
        "Added: Ann Lee\n\
         Found: Ann Lee | 1 | a@x.com\n\
         Contact 'Ann \"Al\" Lee' not found.\n",
    );
}

const SEEDED: &str = "add Bob 111 b@x.com\nadd alice 222 a@x.com\n";

fn same_output(primary: &str, alias: &str) {
    let run = |command: &str| {
        let output = Command::cargo_bin("contacts")
            .unwrap()
            .write_stdin(format!("{}{}", SEEDED, command))
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let expected = run(primary);
    assert_eq!(run(alias), expected);
}

#[test]
fn find_is_search() {
    same_output("search Bob\nsearch Carl\n", "find Bob\nfind Carl\n");
}

#[test]
fn rm_is_delete() {
    same_output("delete Bob\ndelete Bob\ndisplay\n", "rm Bob\nrm Bob\ndisplay\n");
}

#[test]
fn list_is_display() {
    same_output("display\n", "list\n");
    contacts("list\n").stdout("Contact book is empty.\n");
}

#[test]
fn exit_is_quit() {
    same_output("quit\ndisplay\n", "exit\ndisplay\n");
    contacts("add Ann 1 a@x.com\nexit\nadd Ben 2 b@x.com\n").stdout("Added: Ann\n");
}
