// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Immutable fixed-length vector.

use std::ops::Deref;

use crate::error::{VectorError, VectorResult};

/// Ordered, fixed-length sequence of homogeneous elements.
///
/// The length is fixed at construction; there is no way to push or remove
/// elements afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    elements: Box<[T]>,
}

impl<T: Copy> Vector<T> {
    /// Build a vector from a nullable source, rejecting the first empty slot.
    pub fn from_slots<I>(slots: I) -> VectorResult<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let elements = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(VectorError::NullElement { index }))
            .collect::<VectorResult<Box<[T]>>>()?;

        Ok(Self { elements })
    }

    /// Copy a borrowed slice into a new vector.
    pub fn from_slice(elements: &[T]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T> Vector<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow the elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consume the vector, returning its elements.
    pub fn into_inner(self) -> Box<[T]> {
        self.elements
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for Vector<T> {
    fn from(elements: Box<[T]>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
