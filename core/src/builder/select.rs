use crate::cmp::Comparator;

use super::Rendered;

/// Builds `SELECT <cols> FROM <table> [WHERE ...] [LIMIT n]`
#[derive(Debug, Clone)]
pub struct SelectBuilder<'a> {
    table: &'a str,
    columns: Vec<&'a str>,
    conditions: Vec<&'a Comparator>,
    limit: Option<u32>,
}

impl<'a> SelectBuilder<'a> {
    pub fn new(table: &'a str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            conditions: Vec::new(),
            limit: None,
        }
    }

    /// Columns to project; none means `*`
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.columns.extend(columns);
        self
    }

    /// Add conditions, joined with `AND`
    pub fn r#where<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = &'a Comparator>,
    {
        self.conditions.extend(conditions);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement; placeholder names follow condition order
    pub fn to_cql(&self) -> Rendered {
        let mut statement = String::from("SELECT ");
        if self.columns.is_empty() {
            statement.push('*');
        } else {
            statement.push_str(&self.columns.join(","));
        }
        statement.push_str(" FROM ");
        statement.push_str(self.table);

        if !self.conditions.is_empty() {
            let conditions = self
                .conditions
                .iter()
                .map(|c| c.to_cql())
                .collect::<Vec<_>>()
                .join(" AND ");
            statement.push_str(" WHERE ");
            statement.push_str(&conditions);
        }

        if let Some(limit) = self.limit {
            statement.push_str(&format!(" LIMIT {limit}"));
        }

        let names = self
            .conditions
            .iter()
            .map(|c| c.column().to_string())
            .collect();
        (statement, names)
    }
}
