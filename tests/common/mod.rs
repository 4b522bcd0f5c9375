//! Common test utilities: scripted collaborators and context builders
//!
//! `FakeIo` stands in for the OS boundary: tests script subprocess outputs
//! and filesystem state up front, then assert on the exact commands and file
//! writes a command produced.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::rc::Rc;

use wn::{Context, Io, Notifier, RemoteExecutor, WnError, WnResult};

/// Scripted OS boundary
pub struct FakeIo {
    app_name: RefCell<String>,
    outputs: RefCell<HashMap<String, String>>,
    execs: RefCell<Vec<String>>,
    reads: RefCell<Vec<String>>,
    dirs: RefCell<HashSet<String>>,
    files: RefCell<HashMap<String, String>>,
    executables: RefCell<HashSet<String>>,
    path_binaries: RefCell<HashSet<String>>,
}

impl FakeIo {
    pub fn new() -> Rc<Self> {
        Rc::new(FakeIo {
            app_name: RefCell::new("myapp".to_string()),
            outputs: RefCell::new(HashMap::new()),
            execs: RefCell::new(Vec::new()),
            reads: RefCell::new(Vec::new()),
            dirs: RefCell::new(HashSet::new()),
            files: RefCell::new(HashMap::new()),
            executables: RefCell::new(HashSet::new()),
            path_binaries: RefCell::new(HashSet::new()),
        })
    }

    /// Script the output of a shell command; unscripted commands return ""
    pub fn on_exec(&self, command: &str, output: &str) {
        self.outputs
            .borrow_mut()
            .insert(command.to_string(), output.to_string());
    }

    pub fn set_app_name(&self, name: &str) {
        *self.app_name.borrow_mut() = name.to_string();
    }

    pub fn add_dir(&self, path: &str) {
        self.dirs.borrow_mut().insert(path.to_string());
    }

    pub fn add_file(&self, path: &str, contents: &str) {
        self.files
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
    }

    pub fn add_path_binary(&self, binary: &str) {
        self.path_binaries.borrow_mut().insert(binary.to_string());
    }

    /// Every shell command issued, in order
    pub fn executed(&self) -> Vec<String> {
        self.execs.borrow().clone()
    }

    /// Every file read issued, in order
    pub fn read_paths(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    pub fn file_contents(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.executables.borrow().contains(path)
    }
}

impl Io for FakeIo {
    fn exec(&self, command: &str) -> io::Result<String> {
        self.execs.borrow_mut().push(command.to_string());
        Ok(self
            .outputs
            .borrow()
            .get(command)
            .cloned()
            .unwrap_or_default())
    }

    fn directory_exists(&self, path: &str) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        self.reads.borrow_mut().push(path.to_string());
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{path} not found")))
    }

    fn create_file(&self, path: &str, contents: &str) -> io::Result<()> {
        if !self.file_exists(path) {
            self.add_file(path, contents);
        }
        Ok(())
    }

    fn make_executable(&self, path: &str) -> io::Result<()> {
        self.executables.borrow_mut().insert(path.to_string());
        Ok(())
    }

    fn app_name(&self) -> String {
        self.app_name.borrow().clone()
    }

    fn in_path(&self, binary: &str) -> bool {
        self.path_binaries.borrow().contains(binary)
    }
}

/// Remote executor that records calls and replies with a canned output
pub struct FakeRemote {
    pub calls: Rc<RefCell<Vec<(String, String)>>>,
    pub reply: String,
    pub fail: bool,
}

impl RemoteExecutor for FakeRemote {
    fn exec(&self, host: &str, command: &str) -> WnResult<String> {
        self.calls
            .borrow_mut()
            .push((host.to_string(), command.to_string()));
        if self.fail {
            return Err(WnError::Git(self.reply.clone()));
        }
        Ok(self.reply.clone())
    }
}

/// Notifier that records every message
pub struct FakeNotifier {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl Notifier for FakeNotifier {
    fn message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}

/// A context over fakes, with handles to inspect what happened
pub struct TestContext {
    pub io: Rc<FakeIo>,
    pub ctx: Context,
    pub remote_calls: Rc<RefCell<Vec<(String, String)>>>,
    pub notifications: Rc<RefCell<Vec<String>>>,
}

pub fn context_over(io: Rc<FakeIo>) -> TestContext {
    context_over_with_reply(io, "")
}

pub fn context_over_with_reply(io: Rc<FakeIo>, remote_reply: &str) -> TestContext {
    let remote_calls = Rc::new(RefCell::new(Vec::new()));
    let notifications = Rc::new(RefCell::new(Vec::new()));

    let ctx = Context::new(
        Rc::clone(&io) as Rc<dyn Io>,
        Box::new(FakeRemote {
            calls: Rc::clone(&remote_calls),
            reply: remote_reply.to_string(),
            fail: false,
        }),
        Box::new(FakeNotifier {
            messages: Rc::clone(&notifications),
        }),
    );

    TestContext {
        io,
        ctx,
        remote_calls,
        notifications,
    }
}

/// An io scripted as a fully initialized deployment:
/// repository, webbynode remote, marker directory and descriptor all present.
pub fn initialized_io() -> Rc<FakeIo> {
    let io = FakeIo::new();
    io.add_dir(".git");
    io.on_exec("git remote", "webbynode\n");
    io.add_dir(".webbynode");
    io.add_file(".pushand", "#! /bin/bash\nphd $0 myapp\n");
    io.add_file(
        ".git/config",
        "[core]\n\trepositoryformatversion = 0\n[remote \"webbynode\"]\n\turl = git@4.5.6.7:myapp\n",
    );
    io
}
