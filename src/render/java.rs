//! Java companion emission using genco

use crate::classify::TypeShape;
use crate::error::{Error, Result};
use crate::plan::{FieldBinding, FieldPlan};
use crate::spec::AnnotatedClass;
use crate::util::capitalize;
use genco::prelude::*;
use std::collections::BTreeSet;

use super::RenderConfig;

/// Render the unit to Java source text
pub(super) fn render(
    unit: &AnnotatedClass,
    plans: &[FieldPlan],
    imports: &BTreeSet<String>,
    config: &RenderConfig,
) -> Result<String> {
    let tokens = DtoRenderer {
        unit,
        plans,
        imports,
        config,
    }
    .render();
    tokens
        .to_file_string()
        .map_err(|e| Error::Render(e.to_string()))
}

struct DtoRenderer<'a> {
    unit: &'a AnnotatedClass,
    plans: &'a [FieldPlan],
    imports: &'a BTreeSet<String>,
    config: &'a RenderConfig,
}

impl<'a> DtoRenderer<'a> {
    fn render(&self) -> java::Tokens {
        let dto = self.unit.dto_name();
        let mut t = java::Tokens::new();

        if self.config.provenance {
            t.append(format!("// GENERATED FROM: {}", self.unit.class.name));
            t.push();
            t.append(format!("// SOURCE HASH: {}", self.unit.hash()));
            t.push();
            t.append("// DO NOT EDIT - regenerate from the model definition");
            t.line();
        }

        t.append(format!("package {};", self.unit.class.package));
        t.line();

        for imp in self.imports {
            t.append(format!("import {};", imp));
            t.push();
        }
        t.line();

        t.append(self.render_class(&dto));
        t
    }

    fn render_class(&self, dto: &str) -> java::Tokens {
        quote! {
            public class $dto {
                $(self.render_fields())
                $['\r']
                $(self.render_accessors())
                $(self.render_from(dto))
                $['\r']
                $(self.render_to_model())
                $['\r']
                $(self.render_to_string(dto))
                $['\r']
                $(self.render_equals(dto))
                $['\r']
                $(self.render_hash())
            }
        }
    }

    /// One private declaration per retained field, emitted name and type
    fn render_fields(&self) -> java::Tokens {
        let mut t = java::Tokens::new();
        for plan in self.plans {
            t.append(quote!(private $(&plan.emitted_type) $(&plan.emitted_name);));
            t.push();
        }
        t
    }

    /// Getter/setter pair per retained field
    fn render_accessors(&self) -> java::Tokens {
        let mut t = java::Tokens::new();
        for plan in self.plans {
            let cap = capitalize(&plan.emitted_name);
            let ty = &plan.emitted_type;
            let name = &plan.emitted_name;
            t.append(quote! {
                public $ty get$(&cap)() {
                    return $name;
                }
                $['\r']
                public void set$(&cap)($ty $name) {
                    this.$name = $name;
                }
            });
            t.line();
        }
        t
    }

    /// Forward conversion: `from(model)` with per-field null guards
    fn render_from(&self, dto: &str) -> java::Tokens {
        let model = self.unit.class.simple_name();
        let mut body = java::Tokens::new();
        for plan in self.plans {
            body.append(self.render_from_field(plan));
            body.push();
        }

        quote! {
            public static $dto from($model model) {
                if (model == null) {
                    return null;
                }
                $['\r']
                $dto dto = new $dto();
                $['\r']
                $body
                $['\r']
                return dto;
            }
        }
    }

    fn render_from_field(&self, plan: &FieldPlan) -> java::Tokens {
        let cap = capitalize(&plan.name);
        let getter = format!("model.get{}()", cap);

        match &plan.binding {
            FieldBinding::Flatten => quote! {
                if ($(&getter) != null) {
                    dto.set$(&cap)Id($(&getter).getId());
                }
            },
            FieldBinding::Nested(companion) => match &plan.shape {
                TypeShape::Collection(kind, _) => {
                    let collector = kind.collector();
                    quote! {
                        if ($(&getter) != null) {
                            dto.set$(&cap)($(&getter).stream()
                                .map($companion::from)
                                .collect($collector));
                        }
                    }
                }
                TypeShape::Map(_, _) => quote! {
                    if ($(&getter) != null) {
                        dto.set$(&cap)($(&getter).entrySet().stream()
                            .collect(java.util.stream.Collectors.toMap(
                                e -> e.getKey(),
                                e -> $companion.from(e.getValue()))));
                    }
                },
                TypeShape::Scalar | TypeShape::Plain => quote! {
                    if ($(&getter) != null) {
                        dto.set$(&cap)($companion.from($(&getter)));
                    }
                },
            },
            FieldBinding::Copy => quote!(dto.set$(&cap)($(&getter));),
        }
    }

    /// Reverse conversion: `toModel()`; flatten fields are skipped, the
    /// identifier alone cannot rebuild the relation
    fn render_to_model(&self) -> java::Tokens {
        let model = self.unit.class.simple_name();
        let mut body = java::Tokens::new();
        for plan in self.plans {
            body.append(self.render_to_model_field(plan));
            body.push();
        }

        quote! {
            public $model toModel() {
                $model model = new $model();
                $['\r']
                $body
                $['\r']
                return model;
            }
        }
    }

    fn render_to_model_field(&self, plan: &FieldPlan) -> java::Tokens {
        let cap = capitalize(&plan.name);
        let name = &plan.emitted_name;

        match &plan.binding {
            FieldBinding::Flatten => quote!($(format!(
                "// {} (flatten) cannot be rebuilt from the identifier alone",
                plan.name
            ))),
            FieldBinding::Nested(_) => match &plan.shape {
                TypeShape::Collection(kind, _) => {
                    let collector = kind.collector();
                    quote! {
                        if (this.$name != null) {
                            model.set$(&cap)(this.$name.stream()
                                .map(e -> e.toModel())
                                .collect($collector));
                        }
                    }
                }
                TypeShape::Map(_, _) => quote! {
                    if (this.$name != null) {
                        model.set$(&cap)(this.$name.entrySet().stream()
                            .collect(java.util.stream.Collectors.toMap(
                                e -> e.getKey(),
                                e -> e.getValue().toModel())));
                    }
                },
                TypeShape::Scalar | TypeShape::Plain => quote! {
                    if (this.$name != null) {
                        model.set$(&cap)(this.$name.toModel());
                    }
                },
            },
            FieldBinding::Copy => quote!(model.set$(&cap)(this.$name);),
        }
    }

    /// Diagnostic string representation, declaration order, strings quoted
    fn render_to_string(&self, dto: &str) -> java::Tokens {
        let expr = self.to_string_expr(dto);
        quote! {
            @Override
            public String toString() {
                return $expr;
            }
        }
    }

    fn to_string_expr(&self, dto: &str) -> String {
        let mut expr = format!("\"{dto}{{\"");
        for (i, plan) in self.plans.iter().enumerate() {
            let sep = if i == 0 { "" } else { ", " };
            let name = &plan.emitted_name;
            if plan.is_string() {
                expr.push_str(&format!(" + \"{sep}{name}='\" + {name} + '\\''"));
            } else {
                expr.push_str(&format!(" + \"{sep}{name}=\" + {name}"));
            }
        }
        expr.push_str(" + \"}\"");
        expr
    }

    /// Logical equality over the exact emitted-name list
    fn render_equals(&self, dto: &str) -> java::Tokens {
        let cmp = if self.plans.is_empty() {
            "true".to_string()
        } else {
            self.plans
                .iter()
                .map(|p| format!("java.util.Objects.equals({0}, that.{0})", p.emitted_name))
                .collect::<Vec<_>>()
                .join(" && ")
        };

        quote! {
            @Override
            public boolean equals(Object o) {
                if (this == o) return true;
                if (o == null || getClass() != o.getClass()) return false;
                $dto that = ($dto) o;
                return $cmp;
            }
        }
    }

    /// Hash over the same field list, same order, as equals
    fn render_hash(&self) -> java::Tokens {
        let args = self
            .plans
            .iter()
            .map(|p| p.emitted_name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        quote! {
            @Override
            public int hashCode() {
                return java.util.Objects.hash($args);
            }
        }
    }
}
