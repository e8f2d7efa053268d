// ABOUTME: Card generator for the blog index page.
// ABOUTME: Renders the premium card markup for the published post catalog.

/// Accent slot a category maps onto in the site theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Images,
    Pdfs,
    Qr,
    Productivity,
    Privacy,
    Seo,
}

impl Category {
    /// Chip label shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Pdfs => "PDFs",
            Category::Qr => "QR",
            Category::Productivity => "Productivity",
            Category::Privacy => "Privacy",
            Category::Seo => "SEO",
        }
    }

    /// Theme color token used for borders, gradients, and the chip.
    pub fn color(self) -> &'static str {
        match self {
            Category::Images | Category::Productivity => "primary",
            Category::Pdfs | Category::Privacy => "accent",
            Category::Qr | Category::Seo => "warning",
        }
    }

    fn icon_path(self) -> &'static str {
        match self {
            Category::Images => "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
            Category::Pdfs => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            Category::Qr => "M12 4v1m6 11h2m-6 0h-2v4m0-11v3m0 0h.01M12 12h4.01M16 20h4M4 12h4m12 0h.01M5 8h2a1 1 0 001-1V5a1 1 0 00-1-1H5a1 1 0 00-1 1v2a1 1 0 001 1zm12 0h2a1 1 0 001-1V5a1 1 0 00-1-1h-2a1 1 0 00-1 1v2a1 1 0 001 1zM5 20h2a1 1 0 001-1v-2a1 1 0 00-1-1H5a1 1 0 00-1 1v2a1 1 0 001 1z",
            Category::Productivity => "M13 10V3L4 14h7v7l9-11h-7z",
            Category::Privacy => "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
            Category::Seo => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
        }
    }

    fn icon_svg(self) -> String {
        format!(
            r#"<svg class="w-5 h-5 text-{color}" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                  <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{path}"/>
                </svg>"#,
            color = self.color(),
            path = self.icon_path(),
        )
    }
}

/// One entry in the published post catalog.
#[derive(Debug, Clone, Copy)]
pub struct Post {
    pub title: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub minutes: u32,
    pub category: Category,
}

/// Renders one premium card.
pub fn render_card(post: &Post) -> String {
    let color = post.category.color();
    format!(
        r#"        <article class="group relative overflow-hidden rounded-2xl bg-gradient-to-br from-surface/50 to-background/50 backdrop-blur-sm border border-border/50 hover:border-{color}/30 transition-all duration-500 hover:shadow-2xl hover:shadow-{color}/10 hover:-translate-y-1">
          <div class="absolute inset-0 bg-gradient-to-br from-{color}/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
          <a href="{link}" class="block p-6 relative z-10">
            <div class="flex items-center gap-2 mb-4">
              <div class="w-10 h-10 rounded-lg bg-gradient-to-br from-{color}/20 to-{color}/40 flex items-center justify-center group-hover:from-{color}/40 group-hover:to-{color}/60 transition-all duration-300">
                {icon}
              </div>
              <span class="text-xs font-medium text-{color} bg-{color}/10 px-3 py-1 rounded-full">{category}</span>
            </div>
            <h2 class="text-xl font-bold mb-3 group-hover:text-transparent group-hover:bg-clip-text group-hover:bg-gradient-to-r group-hover:from-{color} group-hover:to-accent transition-all duration-300">{title}</h2>
            <p class="text-text-secondary leading-relaxed mb-4">{description}</p>
            <div class="flex items-center justify-between">
              <p class="text-xs text-text-tertiary flex items-center gap-2">
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                  <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"/>
                </svg>
                {minutes} min read
              </p>
              <span class="inline-flex items-center gap-2 text-{color} font-medium text-sm group-hover:gap-3 transition-all duration-300">
                Read more
                <svg class="w-4 h-4 group-hover:translate-x-1 transition-transform duration-300" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                  <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
                </svg>
              </span>
            </div>
          </a>
        </article>"#,
        color = color,
        link = post.link,
        icon = post.category.icon_svg(),
        category = post.category.label(),
        title = post.title,
        description = post.description,
        minutes = post.minutes,
    )
}

/// Renders the full fragment, one card per post, newline-terminated.
pub fn render_cards(posts: &[Post]) -> String {
    let mut out = String::new();
    for post in posts {
        out.push_str(&render_card(post));
        out.push('\n');
    }
    out
}

/// The published post catalog, in index order.
pub const PUBLISHED_POSTS: &[Post] = &[
    Post {
        title: "PDF Merge Workflows for Creators",
        link: "../blog/pdf-merge-workflows-for-creators.html",
        description: "Client deliverables, portfolios, ya invoices — neat merging tricks jo aapke flow ko simple banaye.",
        minutes: 7,
        category: Category::Pdfs,
    },
    Post {
        title: "Resize Images Without Losing Quality",
        link: "../blog/resize-images-without-losing-quality.html",
        description: "Web, social, ya print — har use-case ke liye perfect dimensions aur sharpness ka balance.",
        minutes: 9,
        category: Category::Images,
    },
    Post {
        title: "Batch Processing Power Hacks",
        link: "../blog/batch-processing-power-hacks.html",
        description: "Hundreds of files? No stress. Presets, automation, aur time-saving tips that actually work.",
        minutes: 10,
        category: Category::Productivity,
    },
    Post {
        title: "QR Codes that Actually Convert",
        link: "../blog/qr-codes-that-convert.html",
        description: "Design, contrast, size, aur placement — QR codes ko sirf pretty nahi, effective banayein.",
        minutes: 6,
        category: Category::Qr,
    },
    Post {
        title: "Privacy-First Client-Side Processing",
        link: "../blog/privacy-first-client-side-processing.html",
        description: "No upload, no wait. Client-side tools kyun business aur creators dono ke liye better hain.",
        minutes: 8,
        category: Category::Privacy,
    },
    Post {
        title: "WebP vs AVIF (2025)",
        link: "../blog/webp-vs-avif-2025.html",
        description: "Kaun sa format kab use karein? Speed, quality, aur browser support ka clear breakdown.",
        minutes: 7,
        category: Category::Images,
    },
    Post {
        title: "Smart PDF Splitting Techniques",
        link: "../blog/smart-pdf-splitting-techniques.html",
        description: "Large docs ko logically split karna — by chapters, bookmarks, ya page ranges.",
        minutes: 6,
        category: Category::Pdfs,
    },
    Post {
        title: "Brand-Consistent QR Codes",
        link: "../blog/brand-consistent-qr-codes.html",
        description: "Colors, logos, aur safe contrast — broken scans avoid karte hue brand feel intact rakhein.",
        minutes: 5,
        category: Category::Qr,
    },
    Post {
        title: "Faster Workflows with Presets",
        link: "../blog/faster-workflows-with-presets.html",
        description: "Repeat kaam ko one-click bana dijiye — naming rules, export sets, aur batching tips.",
        minutes: 6,
        category: Category::Productivity,
    },
    Post {
        title: "Optimize Images for SEO (2025)",
        link: "../blog/optimize-images-for-seo-2025.html",
        description: "Alt text, dimensions, CLS, aur lazy loading — simple steps jo search me impact dikhate hain.",
        minutes: 9,
        category: Category::Seo,
    },
    Post {
        title: "PDF to Image: Pro Tips",
        link: "../blog/pdf-to-image-pro-tips.html",
        description: "Resolution, anti-aliasing, aur formats — crisp exports for web aur print.",
        minutes: 7,
        category: Category::Pdfs,
    },
    Post {
        title: "Image Conversion Best Practices",
        link: "../blog/image-conversion-best-practices.html",
        description: "PNG→WebP, JPG→AVIF — kab convert karna chahiye aur kis setting pe.",
        minutes: 8,
        category: Category::Images,
    },
    Post {
        title: "Local Processing vs Cloud",
        link: "../blog/local-processing-vs-cloud.html",
        description: "Privacy, speed, cost — realistic comparison with use-case guidance.",
        minutes: 10,
        category: Category::Privacy,
    },
    Post {
        title: "Avoid Over-Compression",
        link: "../blog/how-to-avoid-over-compression.html",
        description: "Artifacts aur banding ko identify karke perfect balance kaise set karein.",
        minutes: 6,
        category: Category::Images,
    },
    Post {
        title: "Social Media Image Sizes (2025)",
        link: "../blog/social-media-image-sizes-2025.html",
        description: "IG, X, LinkedIn, YouTube — latest sizes aur safe areas, ek hi place par.",
        minutes: 5,
        category: Category::Images,
    },
    Post {
        title: "Efficient File Naming for Batches",
        link: "../blog/efficient-file-naming-for-batches.html",
        description: "Patterns jo sort-friendly ho, duplicates avoid karein, aur automation ko feed dein.",
        minutes: 5,
        category: Category::Productivity,
    },
    Post {
        title: "Memory-Friendly Image Processing",
        link: "../blog/memory-friendly-image-processing.html",
        description: "Large files handle karte waqt browser crashes avoid karne ke practical hacks.",
        minutes: 9,
        category: Category::Images,
    },
    Post {
        title: "Choosing the Right DPI",
        link: "../blog/choosing-right-dpi-for-exports.html",
        description: "Print vs web confusion khatam — pixels, DPI, aur PPI ko seedha tareeke se samjhein.",
        minutes: 6,
        category: Category::Images,
    },
    Post {
        title: "AI Upscaling: When to Use",
        link: "../blog/ai-upscaling-when-to-use.html",
        description: "Jab low-res assets hi available hon — realistic expectations and crisp outputs.",
        minutes: 8,
        category: Category::Images,
    },
];
