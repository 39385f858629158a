use crate::codegen::CodegenError;
use crate::codegen::GeneratedFile;
use crate::plan::GenerationPlan;
use crate::spec::Specification;

type Result<T> = std::result::Result<T, CodegenError>;

/// Emits the implementation of a tree for one target language.
pub trait Backend {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn generate(&self, plan: &GenerationPlan<'_>) -> Result<Vec<GeneratedFile>>;
}

/// Plans `spec` once and runs every backend on the plan, in order.
pub fn generate_all(
    spec: &Specification,
    backends: &[&dyn Backend],
) -> Result<Vec<GeneratedFile>> {
    let plan = GenerationPlan::new(spec)?;
    let mut files = vec![];
    for backend in backends {
        let generated = backend.generate(&plan)?;
        log::debug!("{} backend produced {} file(s)", backend.name(), generated.len());
        files.extend(generated);
    }
    Ok(files)
}
