use pageforge_sections::{
    Card, MediaKind, MediaPlacement, PageProperties, PageStyle, Section,
};

/// Options for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit `data-section-id` / `data-section-index` attributes so an
    /// editing chrome can address sections in the rendered output.
    pub edit_mode: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            edit_mode: false,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.clone();
            for _ in 0..self.depth {
                self.add(&indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render a whole page: a wrapper `<div>` carrying the page-level style,
/// then every visible section in list order.
pub fn render_page(
    sections: &[Section],
    properties: &PageProperties,
    options: RenderOptions,
) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line(&format!(
        "<div class=\"page\" style=\"{}\">",
        page_style_attr(&properties.styles())
    ));
    ctx.indent();

    for (index, section) in sections.iter().enumerate() {
        if section.is_visible() {
            render_section_into(section, Some(index), &mut ctx);
        }
    }

    ctx.dedent();
    ctx.add_line("</div>");

    ctx.get_output()
}

/// Render a single section, or `None` when it is hidden.
pub fn render_section(section: &Section, options: RenderOptions) -> Option<String> {
    if !section.is_visible() {
        return None;
    }
    let mut ctx = Context::new(options);
    render_section_into(section, None, &mut ctx);
    Some(ctx.get_output())
}

fn page_style_attr(style: &PageStyle) -> String {
    let mut out = format!(
        "background-color: {}; color: {}; font-family: {}; line-height: {}; \
         letter-spacing: {}; text-shadow: {}",
        escape_html(&style.background_color),
        escape_html(&style.color),
        escape_html(&style.font_family),
        style.line_height,
        escape_html(&style.letter_spacing),
        escape_html(&style.text_shadow),
    );
    if let Some(image) = &style.background_image {
        out.push_str(&format!("; background-image: {}", escape_html(image)));
    }
    if let Some(size) = &style.background_size {
        out.push_str(&format!("; background-size: {}", escape_html(size)));
    }
    if let Some(position) = &style.background_position {
        out.push_str(&format!("; background-position: {}", escape_html(position)));
    }
    if let Some(repeat) = &style.background_repeat {
        out.push_str(&format!("; background-repeat: {}", escape_html(repeat)));
    }
    if let Some(attachment) = &style.background_attachment {
        out.push_str(&format!(
            "; background-attachment: {}",
            escape_html(attachment)
        ));
    }
    out
}

fn render_section_into(section: &Section, index: Option<usize>, ctx: &mut Context) {
    let class = section_class(section);
    let mut open = format!("<section class=\"{class}\"");
    if ctx.options.edit_mode {
        open.push_str(&format!(" data-section-id=\"{}\"", escape_html(section.id())));
        if let Some(index) = index {
            open.push_str(&format!(" data-section-index=\"{index}\""));
        }
    }
    open.push('>');
    ctx.add_line(&open);
    ctx.indent();

    match section {
        Section::Hero(s) => {
            if !s.background_media.is_empty() {
                render_media(&s.background_media, s.media_type, &s.title, ctx);
            } else if !s.background_image.is_empty() {
                render_media(&s.background_image, MediaKind::Image, &s.title, ctx);
            }
            ctx.add_line(&format!("<h1>{}</h1>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
        }

        Section::Slider(s) => {
            render_slides(&s.slides, s.autoplay, s.autoplay_delay, ctx);
        }

        Section::AdvancedSlider(s) => {
            render_slides(&s.slides, s.autoplay, s.autoplay_delay, ctx);
        }

        Section::MediaTextLeft(s) | Section::MediaTextRight(s) => {
            let position = s.media_position.unwrap_or(MediaPlacement::Left);
            if position == MediaPlacement::Left || position == MediaPlacement::Top {
                render_media(&s.media_url, s.media_type, &s.title, ctx);
            }
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
            if position == MediaPlacement::Right || position == MediaPlacement::Bottom {
                render_media(&s.media_url, s.media_type, &s.title, ctx);
            }
        }

        Section::Feature(s) => {
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
            ctx.add_line("<ul>");
            ctx.indent();
            for feature in &s.features {
                ctx.add_line(&format!(
                    "<li><strong>{}</strong> {}</li>",
                    escape_html(&feature.title),
                    escape_html(&feature.description)
                ));
            }
            ctx.dedent();
            ctx.add_line("</ul>");
        }

        Section::Cta(s) => {
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
            ctx.add_line(&format!(
                "<a class=\"button\" href=\"{}\">{}</a>",
                escape_html(&s.button_url),
                escape_html(&s.button_text)
            ));
        }

        Section::FeatureCardGrid(s) => render_cards(&s.cards, ctx),
        Section::InfoCard(s) => render_cards(&s.cards, ctx),

        Section::Divider(s) => {
            ctx.add_line(&format!(
                "<hr style=\"border-top: {} {} {}; width: {}; margin: {}\">",
                escape_html(&s.thickness),
                escape_html(&s.style),
                escape_html(&s.color),
                escape_html(&s.width),
                escape_html(&s.margin)
            ));
        }

        Section::ContactForm(s) => {
            ctx.add_line(&format!(
                "<form action=\"{}\" method=\"{}\">",
                escape_html(&s.form_action),
                escape_html(&s.form_method)
            ));
            ctx.indent();
            for field in &s.fields {
                ctx.add_line(&format!(
                    "<label for=\"{}\">{}</label>",
                    escape_html(&field.id),
                    escape_html(&field.label)
                ));
                let required = if field.required { " required" } else { "" };
                if field.field_type == "textarea" {
                    ctx.add_line(&format!(
                        "<textarea id=\"{}\" name=\"{}\" placeholder=\"{}\"{}></textarea>",
                        escape_html(&field.id),
                        escape_html(&field.name),
                        escape_html(&field.placeholder),
                        required
                    ));
                } else {
                    ctx.add_line(&format!(
                        "<input id=\"{}\" name=\"{}\" type=\"{}\" placeholder=\"{}\"{}>",
                        escape_html(&field.id),
                        escape_html(&field.name),
                        escape_html(&field.field_type),
                        escape_html(&field.placeholder),
                        required
                    ));
                }
            }
            ctx.add_line("<button type=\"submit\">Send</button>");
            ctx.dedent();
            ctx.add_line("</form>");
        }

        Section::Privacy(s) => {
            ctx.add_line(&format!("<div>{}</div>", escape_html(&s.content)));
        }

        // The one deliberate raw passthrough: the variant exists to embed
        // author-supplied markup verbatim.
        Section::CustomCode(s) => {
            ctx.add_line(&s.code);
        }

        Section::HeroResponsive(s) => {
            if !s.background_media.is_empty() {
                render_media(&s.background_media, s.media_type, &s.title, ctx);
            } else if !s.background_image.is_empty() {
                render_media(&s.background_image, MediaKind::Image, &s.title, ctx);
            }
            ctx.add_line(&format!("<h1>{}</h1>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
            ctx.add_line(&format!(
                "<a class=\"button\" href=\"{}\">{}</a>",
                escape_html(&s.button_url),
                escape_html(&s.button_text)
            ));
        }

        Section::Text(s) => {
            if s.media_position == MediaPlacement::Left || s.media_position == MediaPlacement::Top
            {
                render_media(&s.media_url, s.media_type, "", ctx);
            }
            ctx.add_line(&format!(
                "<div style=\"text-align: {}; font-size: {}; color: {}\">{}</div>",
                escape_html(&s.alignment),
                escape_html(&s.font_size),
                escape_html(&s.font_color),
                escape_html(&s.content)
            ));
            if s.media_position == MediaPlacement::Right
                || s.media_position == MediaPlacement::Bottom
            {
                render_media(&s.media_url, s.media_type, "", ctx);
            }
        }

        Section::MediaPlaceholder(s) => render_cards(&s.cards, ctx),

        Section::MediaTextColumns(s) => {
            render_media(&s.media_url, s.media_type, &s.title, ctx);
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
        }

        Section::TwoColumnText(s) => {
            ctx.add_line(&format!(
                "<div class=\"column\">{}</div>",
                escape_html(&s.left_column)
            ));
            ctx.add_line(&format!(
                "<div class=\"column\">{}</div>",
                escape_html(&s.right_column)
            ));
        }

        Section::Heading(s) => {
            let tag = heading_tag(&s.level);
            ctx.add_line(&format!(
                "<{tag} style=\"text-align: {}; font-size: {}; color: {}\">{}</{tag}>",
                escape_html(&s.alignment),
                escape_html(&s.font_size),
                escape_html(&s.font_color),
                escape_html(&s.text)
            ));
        }

        Section::Quote(s) => {
            ctx.add_line("<blockquote>");
            ctx.indent();
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.text)));
            ctx.add_line(&format!("<footer>{}</footer>", escape_html(&s.author)));
            ctx.dedent();
            ctx.add_line("</blockquote>");
        }

        Section::Gallery(s) => {
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
            for image in &s.images {
                ctx.add_line(&format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    escape_html(&image.url),
                    escape_html(&image.alt)
                ));
            }
        }

        Section::TextWithVideoLeft(s) | Section::TextWithVideoRight(s) => {
            ctx.add_line(&format!(
                "<iframe src=\"https://www.youtube.com/embed/{}\" allowfullscreen></iframe>",
                escape_html(&s.video_id)
            ));
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.title)));
            ctx.add_line(&format!("<p class=\"tagline\">{}</p>", escape_html(&s.tagline)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
        }

        Section::ProductPackageLeft(s) | Section::ProductPackageRight(s) => {
            if !s.badge.is_empty() {
                ctx.add_line(&format!("<span class=\"badge\">{}</span>", escape_html(&s.badge)));
            }
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&s.name)));
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&s.subtitle)));
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(&s.image_src),
                escape_html(&s.image_alt)
            ));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&s.description)));
            ctx.add_line("<ul>");
            ctx.indent();
            for feature in &s.features {
                ctx.add_line(&format!("<li>{}</li>", escape_html(feature)));
            }
            ctx.dedent();
            ctx.add_line("</ul>");
            ctx.add_line(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&s.learn_more_url),
                escape_html(&s.learn_more_text)
            ));
        }
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn section_class(section: &Section) -> String {
    format!("section section-{}", section.kind().as_str())
}

fn render_media(url: &str, kind: MediaKind, alt: &str, ctx: &mut Context) {
    if url.is_empty() {
        return;
    }
    match kind {
        MediaKind::Image => ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(url),
            escape_html(alt)
        )),
        MediaKind::Video => ctx.add_line(&format!(
            "<video src=\"{}\" autoplay loop muted playsinline></video>",
            escape_html(url)
        )),
    }
}

fn render_slides(slides: &[pageforge_sections::Slide], autoplay: bool, delay: u32, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"slides\" data-autoplay=\"{autoplay}\" data-autoplay-delay=\"{delay}\">"
    ));
    ctx.indent();
    for slide in slides {
        ctx.add_line("<figure>");
        ctx.indent();
        render_media(
            &slide.media_url,
            slide.media_type,
            slide.title.as_deref().unwrap_or(""),
            ctx,
        );
        if let Some(title) = &slide.title {
            ctx.add_line(&format!("<figcaption>{}</figcaption>", escape_html(title)));
        }
        ctx.dedent();
        ctx.add_line("</figure>");
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_cards(cards: &[Card], ctx: &mut Context) {
    ctx.add_line("<div class=\"cards\">");
    ctx.indent();
    for card in cards {
        ctx.add_line("<article class=\"card\">");
        ctx.indent();
        render_media(&card.media_url, card.media_type, &card.title, ctx);
        ctx.add_line(&format!("<h3>{}</h3>", escape_html(&card.title)));
        ctx.add_line(&format!("<p>{}</p>", escape_html(&card.description)));
        if let (Some(text), Some(url)) = (&card.cta_text, &card.cta_url) {
            let target = if card.cta_open_in_new_tab == Some(true) {
                " target=\"_blank\" rel=\"noopener\""
            } else {
                ""
            };
            ctx.add_line(&format!(
                "<a href=\"{}\"{target}>{}</a>",
                escape_html(url),
                escape_html(text)
            ));
        }
        ctx.dedent();
        ctx.add_line("</article>");
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

/// Maps the stored level string (`"h1"`..`"h6"`, or a bare digit) to a
/// heading tag, clamping anything unrecognized to `h2`.
fn heading_tag(level: &str) -> &'static str {
    match level.trim_start_matches('h') {
        "1" => "h1",
        "2" => "h2",
        "3" => "h3",
        "4" => "h4",
        "5" => "h5",
        "6" => "h6",
        _ => "h2",
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
