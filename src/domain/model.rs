use std::fmt;

/// 清單中的一行：`<index>. <name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// 去掉前導 0 的數字字串
    pub index: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `name(`
    Call,
    /// `@name = ...`
    Annotated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `### <ordinal>. **<title>**<rest>`，除了序號以外全部原樣保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub prefix: String,
    pub ordinal: String,
    pub open: String,
    pub title: String,
    pub close: String,
    pub rest: String,
}

impl Heading {
    pub fn render(&self, ordinal: usize) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.prefix, ordinal, self.open, self.title, self.close, self.rest
        )
    }
}
