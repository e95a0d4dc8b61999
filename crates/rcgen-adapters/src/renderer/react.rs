//! React component templates.
//!
//! Each function returns the complete text of one generated file. They are
//! pure: same context in, same text out. The component is a `forwardRef`
//! button styled through `class-variance-authority`, with a Storybook story
//! and a Testing Library test alongside.

use rcgen_core::{
    application::ports::TemplateRenderer,
    domain::{ArtifactKind, RenderContext},
};

/// Renderer producing React + Storybook + Testing Library boilerplate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactRenderer;

impl ReactRenderer {
    /// Create a new React renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for ReactRenderer {
    fn render(&self, kind: ArtifactKind, ctx: &RenderContext) -> String {
        match kind {
            ArtifactKind::Component => component(ctx),
            ArtifactKind::Story => story(ctx),
            ArtifactKind::Test => test_file(ctx),
            ArtifactKind::FolderIndex => folder_index(ctx),
            ArtifactKind::RootIndex => root_index(ctx),
            ArtifactKind::LevelIndex => level_index(ctx),
            ArtifactKind::SharedUtil => shared_util(ctx),
        }
    }
}

/// `<Name>.tsx`
pub fn component(ctx: &RenderContext) -> String {
    let name = ctx.component_name();
    let lower = ctx.lower_name();

    format!(
        r#"import cn from "@/utils/cn";
import {{ VariantProps, cva }} from "class-variance-authority";
import {{ ButtonHTMLAttributes, forwardRef }} from "react";

export const {lower}Variants = cva("px-3 py-1 border-2 border-transparent", {{
	variants: {{
		state: {{
			solid: "bg-emerald-300 text-slate-800",
			outline: "border-emerald-500 text-emerald-900",
			warning: "bg-red-200 text-red-800",
			ghost: "text-slate-700 hover:bg-slate-100",
		}},
		size: {{
			content: "",
			stretch: "w-full",
		}},
	}},
	defaultVariants: {{
		state: "solid",
		size: "content",
	}},
}});

export interface {name}Props extends ButtonHTMLAttributes<HTMLButtonElement>, VariantProps<typeof {lower}Variants> {{}}

const {name} = forwardRef<HTMLButtonElement, {name}Props>((props, ref) => {{
	const {{ state, size, className, ...rest }} = props;
	const style = cn({lower}Variants({{ size, state, className }}));

	return <button ref={{ref}} className={{style}} {{...rest}} />
}});

{name}.displayName = "{name}";

export default {name};
"#
    )
}

/// `<Name>.stories.tsx`
pub fn story(ctx: &RenderContext) -> String {
    let name = ctx.component_name();

    format!(
        r#"import {{ Meta, StoryObj }} from "@storybook/react";
import {name} from "./{name}";

const meta: Meta<typeof {name}> = {{
	component: {name},
	args: {{
		children: "A demo button",
		state: "solid",
		size: "content",
	}},
}};

type Story = StoryObj<typeof {name}>;

export const Solid: Story = {{
	args: {{}},
}};

export const Warning: Story = {{
	args: {{
		state: "warning",
	}},
}};

export const Outlined: Story = {{
	args: {{
		state: "outline",
	}},
}};

export const Ghost: Story = {{
	args: {{
		state: "ghost",
	}},
}};

export const FullWidth: Story = {{
	args: {{
		state: "solid",
		size: "stretch",
	}},
}};

export default meta;
"#
    )
}

/// `<Name>.test.tsx`
pub fn test_file(ctx: &RenderContext) -> String {
    let name = ctx.component_name();

    format!(
        r#"import "@testing-library/jest-dom";
import {{ render, screen }} from "@testing-library/react";
import userEvent from "@testing-library/user-event";
import {name} from "./{name}";

it("should render a div with text `{name}`", async () => {{
	// ARRANGE
	render(<{name} />);

	// ACT
	const el = screen.getByText("{name}");
	await userEvent.click(el);

	// ASSERT
	expect(el).toBeInTheDocument();
}});
"#
    )
}

/// `<Name>/index.ts`
pub fn folder_index(ctx: &RenderContext) -> String {
    let name = ctx.component_name();
    format!("import {name} from \"./{name}\";\n\nexport default {name};\n")
}

/// `<root>/index.ts`; does not depend on the component.
pub fn root_index(_ctx: &RenderContext) -> String {
    "// export all your component levels here\n// for example: export * as L0 from \"./L0\";\n"
        .to_string()
}

/// `<root>/L<n>/index.ts`; does not depend on the component.
pub fn level_index(_ctx: &RenderContext) -> String {
    "// register all your components here as named exports\n".to_string()
}

/// `<root>/utils/cn.ts`; does not depend on the component.
pub fn shared_util(_ctx: &RenderContext) -> String {
    r#"import { ClassValue, clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export default function cn(...inputs: ClassValue[]) {
	return twMerge(clsx(inputs));
}
"#
    .to_string()
}
