use crate::query::{
    ast::order::{OrderByExpr, Ordering},
    renderer::{Render, Renderer},
};

impl Render for Ordering {
    fn render(&self, r: &mut Renderer) {
        let separator = r.dialect.sort_separator();
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                r.push_str(separator);
            }
            key.render(r);
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        r.push_identifier(&self.field);
        r.push_str(" ");
        r.push_str(r.dialect.sort_direction(self.direction));
    }
}
