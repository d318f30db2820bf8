// Portfolio generation prompt templates.
// All prompts for the portfolio module are defined here.

use crate::portfolio::themes::ColorTheme;

/// System prompt: the full style guide for the generated page.
pub const PORTFOLIO_SYSTEM: &str = r#"Create a professional portfolio website inspired by HTML5 UP's 'Directive' template.

OUTPUT: Start with <!DOCTYPE html> immediately. NO text before/after HTML. NO markdown blocks.

DIRECTIVE STYLE:
1. FONT: <link href="https://fonts.googleapis.com/css2?family=Source+Sans+Pro:wght@300;400;600;700;900&display=swap" rel="stylesheet">
   - font-family: 'Source Sans Pro', sans-serif
   - CRITICAL COLOR CONTRAST: Body text MUST be #2c2c2c on light backgrounds (white, #f5f5f5), and white (#ffffff) on dark backgrounds (var(--primary))
   - Body: font-size: clamp(16px, 2.5vw, 18px); font-weight: 400; line-height: 1.7; color: #2c2c2c
   - Headings on light backgrounds: color: #1a1a1a (very dark gray, NOT theme colors)
   - Headings on dark backgrounds: color: #ffffff (white)
   - Headings: font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em
   - Large headings: font-size: clamp(32px, 5vw, 48px); font-weight: 900
   - Medium headings: font-size: clamp(24px, 4vw, 32px); font-weight: 700
   - Small headings: font-size: clamp(18px, 3vw, 24px); font-weight: 600

2. TOP NAVIGATION BAR: position: fixed; top: 0; width: 100%; height: clamp(60px, 8vh, 70px); background: var(--primary); padding: 0 clamp(20px, 5vw, 60px); z-index: 1000
   - Display: flex; align-items: center; justify-content: space-between
   - Logo/Name on left: font-size: clamp(16px, 2.5vw, 20px); font-weight: 700; uppercase; letter-spacing: 0.08em; color: white
   - Nav links on right: display: inline-flex; gap: clamp(15px, 3vw, 30px); font-size: clamp(12px, 1.8vw, 14px); font-weight: 500; uppercase; letter-spacing: 0.05em; color: rgba(255,255,255,0.8)
   - Link hover: color: white; text-decoration: underline

3. MAIN CONTENT: margin-top: clamp(60px, 8vh, 70px); padding-top: 0; width: 100%; max-width: 100%

4. HERO: min-height: clamp(500px, 80vh, 100vh); padding: clamp(60px, 10vw, 100px) clamp(30px, 8vw, 80px); background: var(--primary); display: flex; align-items: center; justify-content: center
   - Content wrapper: max-width: 900px; margin: 0 auto; text-align: center; width: 100%
   - ALL TEXT IN HERO: color: #ffffff !important (pure white for maximum contrast)
   - Greeting: font-size: clamp(16px, 2.5vw, 20px); font-weight: 400; uppercase; letter-spacing: 0.05em; margin-bottom: 15px; color: #ffffff; opacity: 0.95
   - Name: font-size: clamp(32px, 6vw, 56px); font-weight: 900; uppercase; letter-spacing: 0.08em; line-height: 1.2; margin: 0 auto 20px; text-align: center; color: #ffffff
   - Title: font-size: clamp(18px, 3vw, 24px); font-weight: 400; uppercase; letter-spacing: 0.05em; color: #ffffff; opacity: 0.9; text-align: center
   - IMPORTANT: DO NOT include phone number or mobile number anywhere in portfolio

5. SECTIONS: padding: clamp(60px, 10vw, 100px) clamp(30px, 8vw, 80px); width: 100%; max-width: 100%; box-sizing: border-box; alternating backgrounds (white, #f5f5f5)
   - Container: max-width: 1400px; margin: 0 auto
   - Section headings: font-size: clamp(28px, 5vw, 42px); font-weight: 700; uppercase; letter-spacing: 0.06em; margin-bottom: clamp(30px, 5vw, 50px); color: #1a1a1a !important; text-align: center
   - Subheadings: font-size: clamp(18px, 3vw, 22px); font-weight: 600; margin-bottom: 15px; color: #2c2c2c !important
   - Body text in sections: color: #2c2c2c !important

6. LAYOUT: display: grid; grid-template-columns: repeat(auto-fit, minmax(min(100%, 300px), 1fr)); gap: clamp(30px, 5vw, 50px); width: 100%
   - Content blocks: padding: clamp(20px, 4vw, 30px); border-left: 4px solid var(--accent); background: transparent
   - NO border-radius, NO box-shadows - flat minimal design
   - Job titles/company names: color: #1a1a1a !important; font-weight: 600
   - Dates: color: #5a5a5a !important; font-style: italic

7. SKILLS SECTION:
   - grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 20px
   - Each skill card: padding: 20px 24px; background: #ffffff; border: 2px solid #e0e0e0; border-left: 4px solid var(--accent); transition: all 0.3s ease
   - Skill name: font-size: clamp(14px, 2vw, 16px); font-weight: 600; color: #1a1a1a !important; text-transform: uppercase
   - Progress bar container: width: 100%; height: 6px; background: #e8e8e8; margin-top: 12px; border-radius: 3px; overflow: hidden
   - Progress fill: height: 100%; background: linear-gradient(90deg, var(--accent), var(--primary)); animation: fillBar 1.5s ease-out forwards
   - Card hover: transform: translateY(-5px); border-color: var(--accent); box-shadow: 0 8px 20px rgba(0,0,0,0.1)
   - @keyframes fillBar { from { width: 0; } to { width: 100%; } }

8. BUTTONS: border: 2px solid var(--primary); background: transparent; padding: clamp(12px, 2vw, 15px) clamp(25px, 4vw, 35px); font-weight: 600; text-transform: uppercase; cursor: pointer; transition: all 0.3s
   - Hover: background: var(--primary); color: white

9. FOOTER: padding: clamp(40px, 6vw, 60px) clamp(30px, 8vw, 80px); background: #2e3141; color: rgba(255,255,255,0.6); text-align: center
   - Text: font-size: clamp(11px, 1.5vw, 13px); text-transform: uppercase; letter-spacing: 0.08em

10. SCROLL ANIMATIONS:
   - section { opacity: 1 !important; } (ALL sections visible by default)
   - .animate-on-scroll:not(.visible) { opacity: 0; transform: translateY(30px); }
   - .animate-on-scroll { transition: opacity 0.8s ease, transform 0.8s ease; }
   - .animate-on-scroll.visible { opacity: 1; transform: translateY(0); }
   - Add class "animate-on-scroll" to every section except #intro

11. RESPONSIVE:
   - All sizing uses clamp() for fluid scaling
   - Grid layouts use auto-fit with minmax for flexible columns
   - @media (max-width: 768px): nav links font-size: 11px, letter-spacing: 0.03em, skills grid 2 columns
   - @media (max-width: 480px): single column layouts, padding: 40px 20px, skills grid 1 column

CRITICAL JAVASCRIPT (must be exactly this, at the end of <body> before </body>):
<script>
document.addEventListener('DOMContentLoaded', function() {
  const sections = document.querySelectorAll('.animate-on-scroll');
  const observer = new IntersectionObserver((entries) => {
    entries.forEach(entry => {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
      }
    });
  }, { threshold: 0.1 });
  sections.forEach(section => observer.observe(section));
});
</script>

STRUCTURE: <!DOCTYPE html><html><head><meta name="viewport" content="width=device-width, initial-scale=1.0">..Source Sans Pro..<style>:root {--primary: X; --secondary: Y; --accent: Z;} ...</style></head><body><nav id="navbar">LOGO + NAV LINKS</nav><main><section id="intro">HERO</section><section id="summary" class="animate-on-scroll">SUMMARY</section><section id="experience" class="animate-on-scroll">EXPERIENCE</section><section id="skills" class="animate-on-scroll">SKILLS with progress bars</section><section id="education" class="animate-on-scroll">EDUCATION</section><footer>COPYRIGHT</footer></main><script>...</script></body></html>

CRITICAL COLOR CONTRAST RULES:
1. Hero section (#intro): ALL text MUST be #ffffff on var(--primary) background
2. Navigation bar: ALL text MUST be #ffffff on var(--primary) background
3. Content sections: ALL text MUST be #1a1a1a or #2c2c2c on white/#f5f5f5 backgrounds
4. Footer: text rgba(255,255,255,0.6) on #2e3141 background
5. NEVER use theme colors (primary/secondary/accent) for text on similar colored backgrounds
6. Use !important to enforce color contrast where needed

CRITICAL REMINDERS:
- DO NOT include phone numbers, mobile numbers or street addresses anywhere
- Text such as [PHONE NUMBER REMOVED], [ADDRESS REMOVED] or [ZIP REMOVED] is a redaction marker: omit it from the page
- Skills MUST have progress bars with gradient fill animation
- Name MUST be perfectly centered in hero section
- Hero section (#intro) MUST NOT have the "animate-on-scroll" class

Output pure HTML only."#;

/// User prompt template.
/// Replace: {resume_text}, {primary}, {secondary}, {accent}, {background}, {text}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"Generate portfolio HTML with this resume:

{resume_text}

Colors:
- Primary: {primary}
- Secondary: {secondary}
- Accent: {accent}
- Background: {background}
- Text: {text}

Use Directive style. Start with <!DOCTYPE html>. NO text before/after."#;

/// Fills the user prompt with the filtered résumé text and theme colors.
pub fn build_portfolio_prompt(resume_text: &str, theme: &ColorTheme) -> String {
    // Colors first: the résumé text is untrusted and may itself contain `{...}`.
    PORTFOLIO_PROMPT_TEMPLATE
        .replace("{primary}", theme.primary)
        .replace("{secondary}", theme.secondary)
        .replace("{accent}", theme.accent)
        .replace("{background}", theme.background)
        .replace("{text}", theme.text)
        .replace("{resume_text}", resume_text)
}
