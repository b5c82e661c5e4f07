use kernel::KernelError;

/// Lifts a backend-specific failure into a [`KernelError`] report.
pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
