use crate::StatusFlags;

/// Represents an arithmetic operation, and its result.
/// The value is always the wrapped (two's complement) result, the flags
/// tell which boundary the exact result crossed, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AluOutput<T> {
    pub value: T,
    pub flags: StatusFlags,
}

impl<T> AluOutput<T> {
    pub fn new(value: T, flags: StatusFlags) -> Self {
        AluOutput { value, flags }
    }

    /// A result that fits the target type.
    pub fn exact(value: T) -> Self {
        Self::new(value, StatusFlags::NONE)
    }

    pub fn is_exact(&self) -> bool {
        self.flags.is_none()
    }

    pub fn into_parts(self) -> (T, StatusFlags) {
        (self.value, self.flags)
    }

    /// Feeds the value into the next operation. Flags are sticky: the
    /// output carries the merge of this step and the next one.
    pub fn then<U, F>(self, f: F) -> AluOutput<U>
    where
        F: FnOnce(T) -> AluOutput<U>,
    {
        let next = f(self.value);
        AluOutput::new(next.value, self.flags.merge(next.flags))
    }

    pub fn map<U, F>(self, f: F) -> AluOutput<U>
    where
        F: FnOnce(T) -> U,
    {
        AluOutput::new(f(self.value), self.flags)
    }
}

impl<T> From<AluOutput<T>> for StatusFlags {
    fn from(output: AluOutput<T>) -> Self {
        output.flags
    }
}
