// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::discretize::{Discretization, discretize_transposed};
use crate::error::{MrmrError, Result};
use crate::estimators::attribute_information::AttributeInformation;
use crate::estimators::mutual_information::{Column, DiscreteMutualInformation};
use crate::estimators::traits::GlobalValue;
use crate::symbol::Symbol;

/// Discretized attributes with their cached per-attribute statistics.
///
/// Values are stored attributes x instances. Every attribute has exactly one
/// [`AttributeInformation`] and all attributes share the same instance count.
/// Attribute names are not required to be unique; lookups by name resolve to
/// the first match.
#[derive(Debug, Clone)]
pub struct Dataset<S: Symbol> {
    names: Vec<String>,
    values: Array2<S>,
    info: Vec<AttributeInformation<S>>,
}

impl<S: Symbol> Default for Dataset<S> {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            values: Array2::default((0, 0)),
            info: Vec::new(),
        }
    }
}

impl<S: Symbol> Dataset<S> {
    /// Build a dataset from an attributes x instances matrix of symbols.
    pub fn new(names: Vec<String>, values: Array2<S>) -> Result<Self> {
        if names.len() != values.nrows() {
            return Err(MrmrError::NameCountMismatch {
                names: names.len(),
                rows: values.nrows(),
            });
        }
        let info = values
            .axis_iter(Axis(0))
            .map(AttributeInformation::new)
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "dataset with {} attributes over {} instances",
            names.len(),
            values.ncols()
        );
        Ok(Self {
            names,
            values,
            info,
        })
    }

    /// Discretize an instances x attributes matrix and build the dataset from it.
    pub fn from_instances(
        names: Vec<String>,
        instances: ArrayView2<'_, f64>,
        policy: Discretization,
    ) -> Result<Self> {
        Self::new(names, discretize_transposed(instances, policy))
    }

    pub fn num_attributes(&self) -> usize {
        self.names.len()
    }

    pub fn num_instances(&self) -> usize {
        self.values.ncols()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn attribute_name(&self, attribute: usize) -> &str {
        &self.names[attribute]
    }

    /// Index of the first attribute called `name`.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Observations of one attribute, in instance order.
    pub fn attribute(&self, attribute: usize) -> ArrayView1<'_, S> {
        self.values.row(attribute)
    }

    /// Full attributes x instances matrix.
    pub fn values(&self) -> ArrayView2<'_, S> {
        self.values.view()
    }

    pub fn info(&self, attribute: usize) -> Result<&AttributeInformation<S>> {
        self.info.get(attribute).ok_or(MrmrError::AttributeOutOfRange {
            index: attribute,
            num_attributes: self.num_attributes(),
        })
    }

    /// Cached entropy of an attribute, in bits.
    pub fn entropy(&self, attribute: usize) -> f64 {
        self.info[attribute].global_value()
    }

    pub fn column(&self, attribute: usize) -> Column<'_, S> {
        Column {
            data: self.values.row(attribute),
            info: &self.info[attribute],
        }
    }

    /// Mutual information between two attributes, in bits. Recomputed on every call.
    pub fn mutual_information(&self, a: usize, b: usize) -> f64 {
        DiscreteMutualInformation::new(self.column(a), self.column(b)).global_value()
    }

    /// Replace the attribute called `name`, or append it when no attribute has
    /// that name. Only the affected attribute's statistics are recomputed.
    ///
    /// Returns the attribute index. On a length mismatch nothing is changed.
    pub fn set_attribute(&mut self, name: &str, data: ArrayView1<'_, S>) -> Result<usize> {
        if self.num_attributes() > 0 && data.len() != self.num_instances() {
            return Err(MrmrError::LengthMismatch {
                expected: self.num_instances(),
                actual: data.len(),
            });
        }
        let info = AttributeInformation::new(data)?;

        if let Some(index) = self.attribute_index(name) {
            self.values.row_mut(index).assign(&data);
            self.info[index] = info;
            debug!("replaced attribute {index} ({name})");
            return Ok(index);
        }

        if self.num_attributes() == 0 {
            self.values = data.to_owned().insert_axis(Axis(0));
        } else {
            self.values
                .push_row(data)
                .map_err(|_| MrmrError::LengthMismatch {
                    expected: self.num_instances(),
                    actual: data.len(),
                })?;
        }
        self.names.push(name.to_string());
        self.info.push(info);
        let index = self.num_attributes() - 1;
        debug!("appended attribute {index} ({name})");
        Ok(index)
    }

    /// Slice convenience for [`Dataset::set_attribute`].
    pub fn set_attribute_slice(&mut self, name: &str, data: &[S]) -> Result<usize> {
        self.set_attribute(name, ArrayView1::from(data))
    }
}
