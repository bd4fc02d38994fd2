use super::Rendered;

/// Builds `INSERT INTO <table> (<cols>) VALUES (?, ...)`
#[derive(Debug, Clone)]
pub struct InsertBuilder<'a> {
    table: &'a str,
    columns: Vec<&'a str>,
}

impl<'a> InsertBuilder<'a> {
    pub fn new(table: &'a str) -> Self {
        Self {
            table,
            columns: Vec::new(),
        }
    }

    /// Append columns to insert
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.columns.extend(columns);
        self
    }

    /// Render the statement; one placeholder per column
    pub fn to_cql(&self) -> Rendered {
        let placeholders = vec!["?"; self.columns.len()].join(",");
        let statement = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(","),
            placeholders
        );
        let names = self.columns.iter().map(|c| c.to_string()).collect();
        (statement, names)
    }
}
