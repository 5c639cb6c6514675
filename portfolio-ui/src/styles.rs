// ============================================================================
// CSS tokens, keyed on `:root[data-theme]`
// ============================================================================

pub const DEFAULT_TOKENS: &str = r#"
:root {
    --bg-primary: #140b08;
    --bg-secondary: #1f120c;
    --text-primary: #fbe9dc;
    --text-secondary: #d6b8a3;
    --accent-primary: #f97316;
    --accent-highlight: #fbbf24;
    --border-color: #4a2a1b;
    --shadow-color: rgba(0, 0, 0, 0.55);

    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    --font-medieval: 'Cinzel', Georgia, serif;
    --font-body: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}

:root[data-theme="fire"] {
    --bg-primary: #140b08;
    --bg-secondary: #1f120c;
    --text-primary: #fbe9dc;
    --text-secondary: #d6b8a3;
    --accent-primary: #f97316;
    --accent-highlight: #fbbf24;
    --border-color: #4a2a1b;
    --shadow-color: rgba(0, 0, 0, 0.55);
}

:root[data-theme="ice"] {
    --bg-primary: #f3f8fd;
    --bg-secondary: #e3eef9;
    --text-primary: #0f1f33;
    --text-secondary: #3b5674;
    --accent-primary: #2563eb;
    --accent-highlight: #0ea5e9;
    --border-color: #bcd2ea;
    --shadow-color: rgba(15, 31, 51, 0.25);
}

* {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    padding: 0;
    font-family: var(--font-body);
    background: var(--bg-primary);
    color: var(--text-primary);
    transition: background 0.6s ease, color 0.6s ease;
}

section {
    min-height: 100vh;
    padding: 6rem 1.5rem 4rem;
}

.section-primary { background: var(--bg-primary); }
.section-alternate { background: var(--bg-secondary); }
.section-light { background: var(--bg-primary); }

.fire-particles {
    background-image: radial-gradient(circle at 20% 80%, rgba(249, 115, 22, 0.08), transparent 40%);
}

.ice-particles {
    background-image: radial-gradient(circle at 80% 20%, rgba(37, 99, 235, 0.08), transparent 40%);
}

.nav-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    height: 4rem;
    transition: background 0.3s ease, border-color 0.3s ease;
    border-bottom: 1px solid transparent;
    background: transparent;
}

.nav-bar.scrolled {
    background: var(--bg-primary);
    border-bottom-color: var(--border-color);
    backdrop-filter: blur(12px);
    box-shadow: 0 4px 12px var(--shadow-color);
}

.nav-item.active .primary-label {
    border-bottom: 2px solid var(--accent-primary);
    padding-bottom: 2px;
}

.mobile-menu {
    position: fixed;
    top: 4rem;
    right: 0;
    bottom: 0;
    width: 20rem;
    z-index: 40;
    background: var(--bg-primary);
    border-left: 1px solid var(--border-color);
    transform: translateX(100%);
    opacity: 0;
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.mobile-menu.open {
    transform: translateX(0);
    opacity: 1;
}

.theme-toggle:disabled {
    cursor: not-allowed;
}

.theme-toggle .toggle-ball {
    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.theme-toggle.transitioning .toggle-icon {
    animation: toggle-spin 1.5s ease-in-out;
}

.hero-name {
    font-family: var(--font-medieval);
    font-size: clamp(2rem, 5vw, 3.25rem);
}

.hero-name .fire-mode { color: #fb923c; text-shadow: 0 0 18px rgba(249, 115, 22, 0.45); }
.hero-name .ice-mode { color: #3b82f6; text-shadow: 0 0 18px rgba(59, 130, 246, 0.35); }

.hero-name-transition {
    animation: eruption 2s ease-out;
}

.sparkle-effect {
    animation: sparkle 1s ease-in-out;
}

.name-entrance {
    display: inline-block;
    animation: rise-in 0.8s ease-out;
}

.loading-screen {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--bg-primary);
    transition: opacity 0.6s ease;
}

.loading-screen.hidden {
    opacity: 0;
    pointer-events: none;
}

.error-state {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    background: var(--bg-primary);
}

.error-state .error-card {
    max-width: 32rem;
    padding: 2rem;
    text-align: center;
    border: 1px solid var(--accent-primary);
    border-radius: var(--radius-lg);
    background: var(--bg-secondary);
    color: var(--text-primary);
}

.error-state .error-detail {
    font-family: monospace;
    font-size: 0.8rem;
    color: var(--text-secondary);
    word-break: break-word;
}

.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    z-index: 60;
    background: var(--accent-primary);
    transform-origin: left;
}

@keyframes eruption {
    0% { transform: scale(1); filter: brightness(1); }
    30% { transform: scale(1.08); filter: brightness(1.6); }
    100% { transform: scale(1); filter: brightness(1); }
}

@keyframes sparkle {
    0%, 100% { filter: drop-shadow(0 0 0 transparent); }
    50% { filter: drop-shadow(0 0 10px var(--accent-highlight)); }
}

@keyframes rise-in {
    from { transform: translateY(24px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

@keyframes toggle-spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@media (min-width: 1024px) {
    .mobile-only { display: none !important; }
}

@media (max-width: 1023px) {
    .desktop-only { display: none !important; }
}
"#;
