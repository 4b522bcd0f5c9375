//! Injected collaborators handed to command behaviors
//!
//! Everything a behavior touches outside the process comes through this
//! bundle, so the test suite can assemble one from fakes and assert on the
//! exact side effects a command would have had.

use std::rc::Rc;

use crate::git::Git;
use crate::io::{Io, LocalIo};
use crate::notify::{DesktopNotifier, Notifier};
use crate::remote::{RemoteExecutor, SshExecutor};

pub struct Context {
    pub io: Rc<dyn Io>,
    pub git: Git,
    pub remote_executor: Box<dyn RemoteExecutor>,
    pub notifier: Box<dyn Notifier>,
}

impl Context {
    /// Real collaborators operating on the current working directory
    pub fn local() -> Self {
        let io: Rc<dyn Io> = Rc::new(LocalIo::new());
        Context {
            git: Git::new(Rc::clone(&io)),
            remote_executor: Box::new(SshExecutor::new()),
            notifier: Box::new(DesktopNotifier::new(Rc::clone(&io))),
            io,
        }
    }

    /// Assemble a context from explicit collaborators
    pub fn new(
        io: Rc<dyn Io>,
        remote_executor: Box<dyn RemoteExecutor>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Context {
            git: Git::new(Rc::clone(&io)),
            remote_executor,
            notifier,
            io,
        }
    }
}
