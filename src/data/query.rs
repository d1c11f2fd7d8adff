use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::data::value::Value;
use crate::entity::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    /// Exact comparison; strings are compared byte for byte.
    pub fn matches(&self, candidate: Option<&Value>) -> bool {
        let candidate = candidate.unwrap_or(&Value::Null);
        match self.op {
            FilterOp::Eq => candidate == &self.value,
            FilterOp::Ne => candidate != &self.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

/// An unexecuted, composable filter over records of type `T`.
pub struct Query<T> {
    pub filters: Vec<Filter>,
    pub sorting: Vec<Sort>,
    pub page: u32,
    pub page_size: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Query<T> {
    pub const DEFAULT_PAGE_SIZE: u32 = 50;

    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sorting: Vec::new(),
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
            _marker: PhantomData,
        }
    }

    pub fn with_filter(self, column: &str, value: Value) -> Self {
        self.with_filter_op(column, FilterOp::Eq, value)
    }

    pub fn with_filter_op(mut self, column: &str, op: FilterOp, value: Value) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op,
            value,
        });
        self
    }

    pub fn with_sort(mut self, column: &str, direction: SortDirection) -> Self {
        self.sorting.push(Sort {
            column: column.to_string(),
            direction,
        });
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    /// Columns referenced by filters and sorting, in order of appearance.
    pub fn referenced_columns(&self) -> impl Iterator<Item = &str> {
        self.filters
            .iter()
            .map(|filter| filter.column.as_str())
            .chain(self.sorting.iter().map(|sort| sort.column.as_str()))
    }
}

impl<T: Record> Query<T> {
    pub fn matches(&self, record: &T) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.matches(record.get(&filter.column)))
    }

    /// Orders two records by the query's sort keys; ties keep storage order.
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        for sort in &self.sorting {
            let ordering = compare_values(left.get(&sort.column), right.get(&sort.column));
            let ordering = match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    let left = left.unwrap_or(&Value::Null);
    let right = right.unwrap_or(&Value::Null);
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Uuid(a), Value::Uuid(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (a, b) => a.to_string().cmp(&b.to_string()),
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            sorting: self.sorting.clone(),
            page: self.page,
            page_size: self.page_size,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filters", &self.filters)
            .field("sorting", &self.sorting)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .finish()
    }
}
