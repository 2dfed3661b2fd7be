//! Defines the core rendering trait and context for converting AST to text.

use crate::query::{ast::predicate::Ident, dialect::Dialect};

pub mod order;
pub mod predicate;

/// A trait for any AST node that can be rendered into expression text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the expression text and the bound arguments. The argument
/// list doubles as the placeholder counter, so every placeholder written is
/// the next unused index.
pub struct Renderer<'a> {
    pub text: String,
    pub arguments: Vec<String>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            text: String::new(),
            arguments: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final text and arguments.
    pub fn finish(self) -> (String, Vec<String>) {
        (self.text, self.arguments)
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn push_identifier(&mut self, ident: &Ident) {
        let quoted = self.dialect.quote_identifier(&ident.name);
        self.text.push_str(&quoted);
    }

    /// Binds an argument and writes its placeholder.
    pub fn add_argument(&mut self, value: String) {
        self.arguments.push(value);
        let placeholder = self.dialect.placeholder(self.arguments.len() - 1);
        self.text.push_str(&placeholder);
    }
}
