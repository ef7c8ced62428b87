//! Line-oriented presentation layer over the order aggregate.
//!
//! The shell owns the order list and at most one open editing session.
//! Each input line becomes one intent; edits go to the session, after
//! which a status line is printed. Bad input prints a message and the loop
//! goes on.

mod intent;
mod render;

use std::io::{self, BufRead, Write};

use chrono::Utc;
use rust_decimal::Decimal;
use workshop_core::store::storage;
use workshop_core::{
    Catalog, InMemoryOrderRepository, Order, OrderCommand, OrderRepository, ServiceSession,
    SessionCommand, SparePart, View,
};

pub use intent::{Intent, IntentError};

use crate::logging;

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, R: OrderRepository = InMemoryOrderRepository> {
    catalog: &'a Catalog,
    repository: R,
    session: Option<ServiceSession<'a>>,
    unit_price: Decimal,
    prompt: bool,
}

impl<'a, R: OrderRepository> Shell<'a, R> {
    pub fn new(
        catalog: &'a Catalog,
        repository: R,
    ) -> Self {
        Self {
            catalog,
            repository,
            session: None,
            unit_price: SparePart::DEFAULT_UNIT_PRICE,
            prompt: false,
        }
    }

    /// Unit price applied to spare parts added without one.
    pub fn with_unit_price(
        mut self,
        unit_price: Decimal,
    ) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Print a prompt before each line (interactive use).
    pub fn with_prompt(
        mut self,
        prompt: bool,
    ) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn session(&self) -> Option<&ServiceSession<'a>> {
        self.session.as_ref()
    }

    /// Reads intents until end of input or `quit`.
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut out: impl Write,
    ) -> io::Result<()> {
        render::list(&mut out, &self.repository.summaries())?;
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "workshop> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            if self.execute(&line?, &mut out)? == Flow::Quit {
                break;
            }
        }
        if self.session.is_some() {
            tracing::warn!("input ended with an unsaved order open; edits dropped");
        }
        Ok(())
    }

    /// Executes one input line.
    pub fn execute(
        &mut self,
        line: &str,
        out: &mut impl Write,
    ) -> io::Result<Flow> {
        match Intent::parse(line) {
            Ok(Some(intent)) => self.handle(intent, out),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle(
        &mut self,
        intent: Intent,
        out: &mut impl Write,
    ) -> io::Result<Flow> {
        match intent {
            Intent::Help => writeln!(out, "{}", render::HELP)?,
            Intent::Quit => return Ok(Flow::Quit),
            Intent::List => render::list(out, &self.repository.summaries())?,
            Intent::Log(level) => match logging::set_log_level(&level) {
                Ok(()) => writeln!(out, "Log level set to {level}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Intent::New => {
                if self.ensure_closed(out)? {
                    let order = self.repository.create_order(Utc::now());
                    self.open(order, out)?;
                }
            }
            Intent::Edit(id) => {
                if self.ensure_closed(out)? {
                    match self.repository.get(id) {
                        Ok(order) => self.open(order, out)?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
            }
            Intent::Save => match self.session.take() {
                Some(session) => {
                    let order = session.save();
                    let id = order.id;
                    self.repository.save(order);
                    writeln!(out, "Saved order {id}")?;
                    render::list(out, &self.repository.summaries())?;
                }
                None => Self::no_session(out)?,
            },
            Intent::Back => match self.session.take() {
                Some(session) => {
                    session.discard();
                    render::list(out, &self.repository.summaries())?;
                }
                None => Self::no_session(out)?,
            },
            Intent::Show => self.with_session(out, |_| {})?,
            Intent::Hub => {
                self.with_session(out, |s| s.dispatch(SessionCommand::ShowView(View::PartsHub)))?
            }
            Intent::Entry => {
                self.with_session(out, |s| s.dispatch(SessionCommand::ShowView(View::Entry)))?
            }
            Intent::Filter(filter) => {
                self.with_session(out, |s| s.dispatch(SessionCommand::SetFilter(filter)))?
            }
            Intent::Export => match &self.session {
                Some(session) => match storage::to_json(session.order()) {
                    Ok(json) => writeln!(out, "{json}")?,
                    Err(e) => writeln!(out, "{e}")?,
                },
                None => Self::no_session(out)?,
            },
            Intent::Order(command) => self.edit(command, out)?,
        }
        Ok(Flow::Continue)
    }

    fn open(
        &mut self,
        order: Order,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let session = ServiceSession::open(self.catalog, order);
        render::view(out, &session)?;
        self.session = Some(session);
        Ok(())
    }

    fn edit(
        &mut self,
        mut command: OrderCommand,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if let OrderCommand::AddSparePart(input) = &mut command {
            input.unit_price.get_or_insert(self.unit_price);
        }
        match self.session.as_mut() {
            Some(session) => {
                session.dispatch(command);
                render::status(out, session)
            }
            None => Self::no_session(out),
        }
    }

    /// Applies `f` to the open session and redraws its view.
    fn with_session(
        &mut self,
        out: &mut impl Write,
        f: impl FnOnce(&mut ServiceSession<'a>),
    ) -> io::Result<()> {
        match self.session.as_mut() {
            Some(session) => {
                f(session);
                render::view(out, session)
            }
            None => Self::no_session(out),
        }
    }

    /// True when no order is open; otherwise tells the operator to close it.
    fn ensure_closed(
        &self,
        out: &mut impl Write,
    ) -> io::Result<bool> {
        if self.session.is_some() {
            writeln!(out, "An order is already open; `save` or `back` first.")?;
            Ok(false)
        } else {
            Ok(true)
        }
    }

    fn no_session(out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "No order open; use `new` or `edit <id>`.")
    }
}
