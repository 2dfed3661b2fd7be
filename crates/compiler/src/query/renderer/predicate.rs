use crate::query::{
    ast::predicate::{Junction, Operand, Predicate},
    renderer::{Render, Renderer},
};

impl Render for Predicate {
    fn render(&self, r: &mut Renderer) {
        match self {
            Predicate::Compare { field, op, operand } => match operand {
                Operand::Param(value) => {
                    r.push_identifier(field);
                    r.push_str(&format!(" {} ", r.dialect.compare_operator(*op)));
                    r.add_argument(value.clone());
                }
                Operand::Null => {
                    let quoted = r.dialect.quote_identifier(&field.name);
                    let text = r.dialect.null_comparison(&quoted, *op);
                    r.push_str(&text);
                }
            },
            Predicate::StringMatch {
                field,
                method,
                value,
            } => {
                let dialect = r.dialect;
                dialect.render_string_match(r, field, *method, value);
            }
            Predicate::Junction(junction) => junction.render(r),
        }
    }
}

impl Render for Junction {
    fn render(&self, r: &mut Renderer) {
        let keyword = r.dialect.logical_operator(self.op);
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                r.push_str(&format!(" {keyword} "));
            }

            // A nested junction with another operator needs its own parentheses
            // even when the terms are rendered bare.
            let wrap = self.grouped
                || matches!(term, Predicate::Junction(inner) if inner.op != self.op);
            if wrap {
                r.push_str("(");
                term.render(r);
                r.push_str(")");
            } else {
                term.render(r);
            }
        }
    }
}
