//! `Walk` implementations for standard library types.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use super::{Walk, Walker};
use crate::error::Result;

impl Walk for String {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        walker.string(self)
    }
}

macro_rules! walk_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                fn walk(&mut self, _: &mut Walker<'_>) -> Result<()> {
                    Ok(())
                }
            }
        )*
    };
}

walk_scalar!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    std::path::PathBuf, std::time::Duration,
);

impl<T: Walk> Walk for Option<T> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        match self {
            Some(value) => value.walk(walker),
            None => Ok(()),
        }
    }
}

impl<T: Walk + ?Sized> Walk for Box<T> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        (**self).walk(walker)
    }
}

impl<T: Walk + ?Sized> Walk for Rc<RefCell<T>> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        let mut inner = self
            .try_borrow_mut()
            .map_err(|_| walker.shared_value_error())?;
        inner.walk(walker)
    }
}

impl<T: Walk + ?Sized> Walk for Arc<Mutex<T>> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        let mut inner = self.lock().map_err(|_| walker.shared_value_error())?;
        inner.walk(walker)
    }
}

impl<T: Walk + ?Sized> Walk for Arc<RwLock<T>> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        let mut inner = self.write().map_err(|_| walker.shared_value_error())?;
        inner.walk(walker)
    }
}

impl<T: Walk> Walk for [T] {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        for (i, item) in self.iter_mut().enumerate() {
            walker.index(i, item)?;
        }
        Ok(())
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        self.as_mut_slice().walk(walker)
    }
}

impl<T: Walk> Walk for Vec<T> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        self.as_mut_slice().walk(walker)
    }
}

impl<T: Walk> Walk for VecDeque<T> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        for (i, item) in self.iter_mut().enumerate() {
            walker.index(i, item)?;
        }
        Ok(())
    }
}

// Keys are never rewritten: only values are reachable.
impl<K, V, S> Walk for HashMap<K, V, S>
where
    K: Eq + Hash + Debug,
    V: Walk,
    S: BuildHasher,
{
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        for (key, value) in self.iter_mut() {
            walker.entry(key, value)?;
        }
        Ok(())
    }
}

impl<K: Ord + Debug, V: Walk> Walk for BTreeMap<K, V> {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        for (key, value) in self.iter_mut() {
            walker.entry(key, value)?;
        }
        Ok(())
    }
}
