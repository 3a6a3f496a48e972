use std::path::Path;

use arcstr::ArcStr;
use gamepack_error::BuildResult;
use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions},
  parser::Parser,
  semantic::SemanticBuilder,
  span::SourceType,
  transformer::{ESTarget, TransformOptions, Transformer},
};

use crate::ecma_ast::{EcmaAst, ProgramCell, ProgramOwner};

pub struct EcmaCompiler;

impl EcmaCompiler {
  pub fn parse(source: impl Into<ArcStr>, source_type: SourceType) -> BuildResult<EcmaAst> {
    let owner = ProgramOwner { source: source.into(), allocator: Allocator::default() };
    let program = ProgramCell::try_new(owner, |owner| {
      let ret = Parser::new(&owner.allocator, &owner.source, source_type).parse();
      if ret.errors.is_empty() {
        Ok(ret.program)
      } else {
        Err(anyhow::anyhow!("{:?}", ret.errors))
      }
    })?;

    Ok(EcmaAst { program, source_type })
  }

  /// Strips TypeScript syntax and lowers the result to `target`. Module syntax is kept as is.
  pub fn transpile_typescript(
    source_text: &str,
    source_path: &Path,
    target: ESTarget,
  ) -> BuildResult<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(source_path).unwrap_or_else(|_| SourceType::ts());

    let ret = Parser::new(&allocator, source_text, source_type).parse();
    if !ret.errors.is_empty() {
      Err(anyhow::anyhow!("Failed to parse {}, got: {:?}", source_path.display(), ret.errors))?;
    }
    let mut program = ret.program;

    let semantic_ret = SemanticBuilder::new().build(&program);
    if !semantic_ret.errors.is_empty() {
      Err(anyhow::anyhow!("Failed to parse {}, got: {:?}", source_path.display(), semantic_ret.errors))?;
    }
    let scoping = semantic_ret.semantic.into_scoping();

    let transformer_return =
      Transformer::new(&allocator, source_path, &TransformOptions::from(target))
        .build_with_scoping(scoping, &mut program);
    if !transformer_return.errors.is_empty() {
      Err(anyhow::anyhow!(
        "Failed to transform {}, got: {:?}",
        source_path.display(),
        transformer_return.errors
      ))?;
    }

    Ok(Codegen::new().build(&program).code)
  }

  pub fn minify(source_text: &str, source_type: SourceType) -> BuildResult<String> {
    let allocator = Allocator::default();

    let ret = Parser::new(&allocator, source_text, source_type).parse();
    if !ret.errors.is_empty() {
      Err(anyhow::anyhow!("Failed to minify, got: {:?}", ret.errors))?;
    }
    let program = allocator.alloc(ret.program);

    let ret = Minifier::new(MinifierOptions {
      mangle: Some(MangleOptions::default()),
      compress: Some(CompressOptions::default()),
    })
    .build(&allocator, program);

    let ret = Codegen::new()
      .with_options(CodegenOptions::minify())
      .with_scoping(ret.scoping)
      .build(program);

    Ok(ret.code)
  }
}

#[test]
fn parse_keeps_source_and_reports_errors() {
  let ast = EcmaCompiler::parse("export const a = 1;", SourceType::mjs()).unwrap();
  assert_eq!(ast.source().as_str(), "export const a = 1;");
  assert!(ast.source_type().is_module());
  assert_eq!(ast.program().body.len(), 1);

  assert!(EcmaCompiler::parse("const = ;", SourceType::mjs()).is_err());
}

#[test]
fn transpile_typescript_strips_types() {
  let code = EcmaCompiler::transpile_typescript(
    "interface Player { name: string }\nexport const greet = (p: Player): string => p.name;\n",
    Path::new("/game/src/index.ts"),
    ESTarget::ESNext,
  )
  .unwrap();

  assert!(!code.contains("interface"));
  assert!(!code.contains(": string"));
  assert!(code.contains("export const greet"));
}

#[test]
fn transpile_typescript_reports_syntax_errors() {
  let ret =
    EcmaCompiler::transpile_typescript("let = ;", Path::new("/game/src/index.ts"), ESTarget::ESNext);
  assert!(ret.is_err());
}

#[test]
fn minify_shrinks_source() {
  let source = "function add(first, second) {\n  return first + second;\n}\nmodule.exports = add;\n";
  let code = EcmaCompiler::minify(source, SourceType::cjs()).unwrap();
  assert!(code.len() < source.len());
  assert!(code.contains("module.exports"));
}
