use crate::descriptor::TypeDescriptor;
use crate::error::Result;

/// Source of root type descriptors.
///
/// This is the seam to whatever reflection mechanism the host application
/// uses: derive macros, source generators, or hand-written schema values.
/// The generation engine only consumes the returned descriptor tree and
/// stays agnostic of how it was obtained.
pub trait DescriptorProvider {
    /// Resolve the root descriptor for the described type.
    fn root_descriptor(&self) -> Result<TypeDescriptor>;
}

/// Explicit schema values are the simplest provider: a descriptor describes
/// itself.
impl DescriptorProvider for TypeDescriptor {
    fn root_descriptor(&self) -> Result<TypeDescriptor> {
        Ok(self.clone())
    }
}
