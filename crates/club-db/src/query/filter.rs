//! WHERE-clause builder with soft-delete visibility baked in
//!
//! Predicates are written with `{}` slots that are replaced by successive
//! `$n` bind placeholders; the caller binds values in the same order the
//! predicates were pushed. The soft-delete guard is appended last and is
//! not expressible as an ordinary predicate: the only way to see deleted
//! rows is the explicit [`QueryFilter::include_deleted`] bypass.

/// Deleted-row visibility of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Only rows whose `deleted_at` is unset (the default everywhere)
    #[default]
    ActiveOnly,
    /// Explicit bypass: deleted rows are visible too
    IncludeDeleted,
}

/// Ordered predicate list rendering to a WHERE clause
#[derive(Debug, Clone)]
pub struct QueryFilter {
    alias: Option<String>,
    conds: Vec<String>,
    visibility: Visibility,
    next_param: usize,
}

impl QueryFilter {
    /// New filter over an unaliased table, bind slots starting at `$1`
    pub fn new() -> Self {
        Self {
            alias: None,
            conds: Vec::new(),
            visibility: Visibility::ActiveOnly,
            next_param: 1,
        }
    }

    /// New filter over a table aliased in the FROM clause
    pub fn with_alias(alias: &str) -> Self {
        Self {
            alias: Some(alias.to_string()),
            ..Self::new()
        }
    }

    /// Bypass the soft-delete guard; deleted rows become visible
    pub fn include_deleted(mut self) -> Self {
        self.visibility = Visibility::IncludeDeleted;
        self
    }

    /// Current visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Add a predicate; each `{}` becomes the next `$n` bind placeholder
    ///
    /// The caller must bind values in push order.
    pub fn push(&mut self, template: &str) -> &mut Self {
        let mut cond = String::with_capacity(template.len() + 4);
        let mut parts = template.split("{}");
        if let Some(first) = parts.next() {
            cond.push_str(first);
        }
        for rest in parts {
            cond.push('$');
            cond.push_str(&self.next_param.to_string());
            self.next_param += 1;
            cond.push_str(rest);
        }
        self.conds.push(cond);
        self
    }

    /// The next unused `$n` slot (e.g. for a trailing LIMIT bind)
    pub fn next_param(&self) -> usize {
        self.next_param
    }

    /// Claim the next `$n` slot for a bind outside the WHERE clause
    pub fn claim_param(&mut self) -> usize {
        let param = self.next_param;
        self.next_param += 1;
        param
    }

    /// Qualify a column with the filter's table alias, if any
    pub fn qualify(&self, column: &str) -> String {
        match &self.alias {
            Some(alias) => format!("{alias}.{column}"),
            None => column.to_string(),
        }
    }

    /// Render the WHERE clause (empty string when nothing constrains the query)
    ///
    /// Under `ActiveOnly` the `deleted_at IS NULL` guard is always present,
    /// including when no predicate was pushed.
    pub fn where_sql(&self) -> String {
        let mut conds = self.conds.clone();
        if self.visibility == Visibility::ActiveOnly {
            conds.push(format!("{} IS NULL", self.qualify("deleted_at")));
        }

        if conds.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conds.join(" AND "))
        }
    }
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self::new()
    }
}
