//! Global CSS styles for the invitation.
//!
//! Rose and gold on cream, serif headings. Palette lives in the custom
//! properties at the top.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Primary) */
  --rose-50: #fff1f2;
  --rose-100: #ffe4e6;
  --rose-200: #fecdd3;
  --rose-300: #fda4af;
  --rose-500: #f43f5e;
  --rose-600: #e11d48;
  --rose-700: #be123c;

  /* GOLD & PAPER (Envelope) */
  --paper: #fefce8;
  --paper-warm: #fef3c7;
  --paper-deep: #e5d174;
  --gold: #d69e2e;
  --amber-700: #b45309;
  --wax: #dc2626;

  /* INFO (Gesture prompt) */
  --info-bg: #dbeafe;
  --info-border: #93c5fd;
  --info-text: #1e40af;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;
  --text-inverse: #ffffff;

  /* Typography */
  --font-serif: 'Playfair Display', 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;

  /* Motion */
  --reveal-duration: 1000ms;
  --flap-duration: 800ms;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: #ffffff;
  overflow-x: hidden;
}

button { font: inherit; cursor: pointer; border: none; background: none; }
button:disabled { cursor: not-allowed; opacity: 0.6; }

/* === Envelope === */
.envelope-site { position: relative; }

.envelope-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, #fffbeb 0%, var(--paper) 50%, #ffedd5 100%);
  transition: opacity var(--reveal-duration) ease-in-out;
}

.envelope-overlay--hidden { opacity: 0; pointer-events: none; }

.envelope {
  position: relative;
  width: 320px;
  height: 224px;
  cursor: pointer;
  perspective: 1000px;
  transition: transform 300ms ease;
}

.envelope:hover { transform: scale(1.05) translateY(-8px); }

.envelope__shadow {
  position: absolute;
  top: 24px;
  left: 16px;
  width: 100%;
  height: 100%;
  background: #000;
  opacity: 0.2;
  filter: blur(24px);
  transform: rotate(1deg);
}

.envelope__body {
  position: absolute;
  inset: 0;
  overflow: hidden;
  background: linear-gradient(135deg, var(--paper) 0%, var(--paper-warm) 30%, #f3e8ab 70%, var(--paper-deep) 100%);
  box-shadow: inset -2px -2px 8px rgba(0,0,0,0.1), inset 2px 2px 8px rgba(255,255,255,0.9), 0 8px 32px rgba(0,0,0,0.2);
}

.envelope__letter {
  position: absolute;
  top: 48px; left: 12px; right: 12px; bottom: 12px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, #ffffff, #f9fafb);
  border: 1px solid #f3f4f6;
}

.envelope__letter-icon { font-size: 36px; margin-bottom: 12px; }

.envelope__letter-text {
  font-family: var(--font-serif);
  color: var(--amber-700);
  letter-spacing: 0.03em;
}

.envelope__letter-rule {
  width: 64px;
  height: 1px;
  margin-top: 8px;
  background: linear-gradient(90deg, transparent, #fcd34d, transparent);
}

.envelope__flap {
  position: absolute;
  top: 0; left: 0;
  width: 100%;
  height: 144px;
  z-index: 10;
  clip-path: polygon(0% 0%, 50% 100%, 100% 0%);
  background: linear-gradient(135deg, #f3e8ab 0%, var(--paper-warm) 30%, #fde68a 70%, var(--gold) 100%);
  box-shadow: 0 4px 12px rgba(0,0,0,0.2);
  transform-origin: 50% 0%;
  transform: rotateX(0deg);
  transition: transform var(--flap-duration) ease-in-out, box-shadow var(--flap-duration) ease-in-out;
}

.envelope__flap--open {
  transform: rotateX(-45deg) translateZ(20px);
  box-shadow: 0 -8px 24px rgba(0,0,0,0.25);
}

.envelope__seal {
  position: absolute;
  top: 80px;
  left: 50%;
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: radial-gradient(circle at 35% 35%, #f87171, var(--wax) 60%, #991b1b);
  box-shadow: 0 4px 12px rgba(239, 68, 68, 0.4);
  transform: translateX(-50%) scale(1);
  transition: opacity 500ms ease, transform 500ms ease;
}

.envelope__seal--broken { opacity: 0; transform: translateX(-50%) scale(0.75); }

.envelope__glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, #fde68a, #fcd34d);
  opacity: 0.4;
  mix-blend-mode: soft-light;
  animation: pulse 1.5s ease-in-out infinite;
}

.envelope__hint {
  position: absolute;
  bottom: -64px;
  left: 50%;
  transform: translateX(-50%);
  text-align: center;
  font-family: var(--font-serif);
  white-space: nowrap;
}

.envelope__hint-title { color: var(--amber-700); font-size: 14px; animation: bounce 1.2s infinite; }
.envelope__hint-subtitle { color: #d97706; font-size: 12px; margin-top: 4px; }

.envelope__particles { position: absolute; inset: 0; pointer-events: none; }

.envelope__particle {
  position: absolute;
  color: var(--rose-300);
  opacity: 0.4;
  font-size: 14px;
  animation: ping 5s cubic-bezier(0, 0, 0.2, 1) infinite;
}

.envelope-content {
  opacity: 0;
  transform: translateY(32px);
  transition: opacity var(--reveal-duration) ease-in-out, transform var(--reveal-duration) ease-in-out;
}

.envelope-content--visible { opacity: 1; transform: translateY(0); }

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 30;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 16px 24px;
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(8px);
  box-shadow: 0 1px 8px rgba(0,0,0,0.06);
}

.navbar__brand { font-family: var(--font-serif); font-size: 22px; color: var(--rose-600); }
.navbar__toggle { display: none; font-size: 22px; color: var(--text-secondary); }
.navbar__links { display: flex; gap: 24px; }
.navbar__link { color: var(--text-secondary); transition: color 200ms; }
.navbar__link:hover { color: var(--rose-500); }

@media (max-width: 640px) {
  .navbar__toggle { display: block; }
  .navbar__links { display: none; }
  .navbar__links--open {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 16px 24px;
    background: #ffffff;
  }
}

/* === Sections === */
.section-header { text-align: center; margin-bottom: 64px; }
.section-title { font-family: var(--font-serif); font-size: 40px; color: var(--text-primary); margin-bottom: 16px; }
.section-subtitle { font-size: 18px; color: var(--text-secondary); max-width: 640px; margin: 0 auto; }

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  padding: 80px 24px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--rose-300), #f9a8d4, #fed7aa);
  color: var(--text-inverse);
  text-align: center;
}

.hero__content { display: flex; flex-direction: column; gap: 28px; align-items: center; }
.hero__eyebrow { font-size: 18px; opacity: 0.9; letter-spacing: 0.05em; }
.hero__names { font-family: var(--font-serif); font-size: 56px; line-height: 1.1; }
.hero__ampersand { display: block; font-size: 32px; font-weight: 300; margin: 8px 0; }
.hero__tagline { font-size: 20px; opacity: 0.8; font-weight: 300; }
.hero__details { display: flex; flex-direction: column; gap: 20px; }
.hero__detail { display: flex; align-items: center; gap: 16px; text-align: left; }
.hero__detail-icon { padding: 12px; border-radius: 50%; background: rgba(255,255,255,0.2); }
.hero__detail-primary { font-size: 20px; font-weight: 500; }
.hero__detail-secondary { opacity: 0.9; }

.hero__cta {
  padding: 16px 32px;
  border-radius: 999px;
  background: #ffffff;
  color: var(--rose-600);
  font-size: 18px;
  font-weight: 500;
  box-shadow: 0 10px 25px rgba(0,0,0,0.15);
  transition: transform 300ms;
}

.hero__cta:hover { transform: scale(1.05); }

.hero__scroll-hint { position: absolute; bottom: 32px; left: 50%; transform: translateX(-50%); font-size: 13px; opacity: 0.7; }
.hero__scroll-mouse { width: 24px; height: 40px; margin: 8px auto 0; border: 2px solid rgba(255,255,255,0.5); border-radius: 999px; position: relative; }
.hero__scroll-wheel { width: 4px; height: 8px; background: rgba(255,255,255,0.7); border-radius: 999px; position: absolute; left: 50%; top: 8px; transform: translateX(-50%); animation: bounce 2s infinite; }

/* === Countdown === */
.countdown {
  padding: 24px;
  border-radius: 16px;
  background: rgba(255,255,255,0.2);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(255,255,255,0.3);
}

.countdown__title { font-weight: 300; margin-bottom: 16px; }
.countdown__arrived { font-family: var(--font-serif); font-size: 24px; }
.countdown__grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.countdown__unit { text-align: center; }
.countdown__value { font-size: 32px; font-weight: 700; font-variant-numeric: tabular-nums; }
.countdown__label { font-size: 13px; opacity: 0.8; }

/* === Story === */
.story { padding: 80px 24px; background: linear-gradient(180deg, #ffffff, var(--rose-50)); }

.timeline { position: relative; max-width: 960px; margin: 0 auto; }
.timeline__line { position: absolute; left: 50%; top: 0; bottom: 0; width: 2px; background: linear-gradient(180deg, var(--rose-200), var(--rose-500)); }
.timeline__item { position: relative; display: flex; align-items: center; margin-bottom: 48px; }
.timeline__item--left { justify-content: flex-start; }
.timeline__item--right { justify-content: flex-end; }
.timeline__card { width: 42%; padding: 24px; border-radius: 16px; background: #ffffff; box-shadow: 0 10px 30px rgba(0,0,0,0.08); }
.timeline__icon { font-size: 28px; margin-bottom: 12px; }
.timeline__title { font-size: 20px; margin-bottom: 8px; }
.timeline__text { color: var(--text-secondary); line-height: 1.6; }

.timeline__year {
  position: absolute;
  left: 50%;
  transform: translateX(-50%);
  width: 64px;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--rose-500), var(--rose-600));
  color: var(--text-inverse);
  font-weight: 700;
}

.story__quote { font-family: var(--font-serif); font-size: 24px; color: var(--text-secondary); max-width: 720px; margin: 64px auto 0; text-align: center; line-height: 1.6; }
.story__cite { display: block; text-align: center; margin-top: 16px; color: var(--text-muted); }

/* === Gallery === */
.gallery { padding: 80px 24px; }
.gallery__grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; max-width: 1100px; margin: 0 auto; }
.gallery__tile { position: relative; aspect-ratio: 1; overflow: hidden; border-radius: 12px; cursor: pointer; }
.gallery__media { width: 100%; height: 100%; object-fit: cover; transition: transform 500ms; }
.gallery__tile:hover .gallery__media { transform: scale(1.1); }
.gallery__badge { position: absolute; top: 12px; right: 12px; padding: 4px 8px; border-radius: 999px; background: rgba(0,0,0,0.5); color: #ffffff; font-size: 12px; }
.gallery__caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 16px; background: linear-gradient(0deg, rgba(0,0,0,0.6), transparent); color: #ffffff; opacity: 0; transition: opacity 300ms; }
.gallery__tile:hover .gallery__caption { opacity: 1; }

.lightbox { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.9); padding: 16px; }
.lightbox__frame { position: relative; max-width: 1000px; max-height: 100%; }
.lightbox__media { max-width: 100%; max-height: 80vh; border-radius: 8px; }
.lightbox__close, .lightbox__prev, .lightbox__next { position: absolute; z-index: 2; color: #ffffff; font-size: 32px; padding: 8px 14px; border-radius: 999px; background: rgba(0,0,0,0.4); }
.lightbox__close { top: 8px; right: 8px; font-size: 20px; }
.lightbox__prev { left: 8px; top: 50%; transform: translateY(-50%); }
.lightbox__next { right: 8px; top: 50%; transform: translateY(-50%); }
.lightbox__caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 24px; background: linear-gradient(0deg, rgba(0,0,0,0.8), transparent); color: #ffffff; }
.lightbox__caption-title { font-size: 18px; font-weight: 500; }
.lightbox__info { position: absolute; right: 24px; bottom: 24px; color: #ffffff; width: 28px; height: 28px; border-radius: 50%; background: rgba(255,255,255,0.2); }
.lightbox__description { margin-top: 8px; font-size: 14px; line-height: 1.6; opacity: 0.9; }

/* === RSVP === */
.rsvp { padding: 80px 24px; background: linear-gradient(180deg, var(--rose-50), #ffffff); }
.rsvp__card { max-width: 640px; margin: 0 auto; padding: 48px; border-radius: 16px; background: #ffffff; border: 1px solid var(--rose-100); box-shadow: 0 20px 40px rgba(0,0,0,0.08); }
.rsvp__card-header { text-align: center; margin-bottom: 32px; }
.rsvp__card-header h3 { font-family: var(--font-serif); font-size: 24px; }
.rsvp__heart { display: block; font-size: 40px; color: var(--rose-500); margin-bottom: 12px; }
.rsvp__form { display: flex; flex-direction: column; gap: 24px; }
.rsvp__field { display: flex; flex-direction: column; gap: 8px; }
.rsvp__field label { font-weight: 500; color: var(--text-secondary); }
.rsvp__field input, .rsvp__field textarea { padding: 10px 12px; border: 1px solid #e5e7eb; border-radius: 8px; font: inherit; resize: none; }
.rsvp__field input:focus, .rsvp__field textarea:focus { outline: none; border-color: var(--rose-500); }
.rsvp__choices { display: flex; gap: 16px; }
.rsvp__choice { flex: 1; padding: 16px; border: 2px solid #e5e7eb; border-radius: 8px; text-align: center; color: var(--text-secondary); transition: border-color 300ms, background 300ms; }
.rsvp__choice:hover { border-color: var(--rose-300); }
.rsvp__choice--yes { border-color: var(--rose-500); background: var(--rose-50); color: var(--rose-700); }
.rsvp__choice--no { border-color: #6b7280; background: #f9fafb; }
.rsvp__choice-icon { font-size: 24px; margin-bottom: 8px; }
.rsvp__submit { display: flex; align-items: center; justify-content: center; gap: 8px; padding: 12px 24px; border-radius: 8px; color: #ffffff; font-weight: 500; background: linear-gradient(90deg, var(--rose-500), var(--rose-600)); box-shadow: 0 10px 20px rgba(225, 29, 72, 0.2); }
.rsvp__spinner { width: 16px; height: 16px; border: 2px solid rgba(255,255,255,0.3); border-top-color: #ffffff; border-radius: 50%; animation: spin 1s linear infinite; }

/* === Footer === */
.footer { padding: 64px 24px 32px; background: #111827; color: #d1d5db; text-align: center; }
.footer__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 32px; max-width: 1100px; margin: 0 auto; }
.footer__column { display: flex; flex-direction: column; gap: 12px; }
.footer__names { font-family: var(--font-serif); font-size: 28px; color: var(--rose-200); }
.footer__heading { font-size: 20px; font-weight: 600; color: var(--rose-300); margin-bottom: 12px; }
.footer__date { font-family: var(--font-serif); font-size: 24px; color: var(--rose-200); }
.footer__note { font-size: 14px; color: var(--text-muted); }
.footer__divider { height: 1px; margin: 40px auto 24px; max-width: 1100px; background: #374151; }
.footer__copyright { font-size: 14px; color: var(--text-muted); }

/* === Music player === */
.music-banner {
  position: fixed;
  top: 16px;
  left: 50%;
  transform: translateX(-50%);
  z-index: 60;
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 12px 24px;
  border-radius: 8px;
  box-shadow: 0 10px 20px rgba(0,0,0,0.1);
  font-size: 14px;
  animation: fade-in 500ms ease-in-out forwards;
}

.music-banner--info { background: var(--info-bg); border: 1px solid var(--info-border); color: var(--info-text); }
.music-banner--info .music-banner__icon { animation: pulse 1.5s ease-in-out infinite; }
.music-banner--blocked { background: var(--rose-100); border: 1px solid var(--rose-300); color: var(--rose-700); }
.music-banner__close { color: var(--rose-600); margin-left: 8px; }

.music-player {
  position: fixed;
  right: 24px;
  bottom: 24px;
  z-index: 60;
  padding: 16px;
  border-radius: 999px;
  background: rgba(255,255,255,0.9);
  backdrop-filter: blur(4px);
  border: 1px solid var(--rose-200);
  box-shadow: 0 10px 20px rgba(0,0,0,0.1);
}

.music-player--waiting { border-color: #60a5fa; box-shadow: 0 0 0 2px #bfdbfe; }
.music-player--blocked { border-color: #fb7185; box-shadow: 0 0 0 2px var(--rose-200); animation: pulse 1.5s ease-in-out infinite; }

.music-player__button {
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  color: #ffffff;
  background: var(--rose-500);
  transition: transform 200ms, background 200ms;
}

.music-player__button:hover:not(:disabled) { transform: scale(1.05); background: var(--rose-600); }
.music-player--loading .music-player__button { background: #9ca3af; }
.music-player--waiting .music-player__button { background: #3b82f6; }
.music-player--blocked .music-player__button { background: var(--rose-600); }
.music-player__icon--play { margin-left: 3px; }
.music-player__spinner { width: 22px; height: 22px; border: 3px solid rgba(255,255,255,0.3); border-top-color: #ffffff; border-radius: 50%; animation: spin 1s linear infinite; }
.music-player__pulse { position: absolute; top: -2px; right: -2px; width: 16px; height: 16px; border-radius: 50%; background: var(--rose-300); animation: pulse 1.5s ease-in-out infinite; }

.music-player__label {
  position: absolute;
  right: 100%;
  top: 50%;
  margin-right: 16px;
  padding: 8px 16px;
  border-radius: 999px;
  background: rgba(0,0,0,0.7);
  color: #ffffff;
  font-size: 14px;
  white-space: nowrap;
  opacity: 0;
  animation: label-in 500ms ease-in-out 200ms forwards;
}

/* === Toasts === */
.toaster { position: fixed; right: 16px; top: 16px; z-index: 70; display: flex; flex-direction: column; gap: 8px; max-width: 360px; }
.toast { display: flex; align-items: flex-start; gap: 12px; padding: 16px; border-radius: 8px; background: #ffffff; border: 1px solid #e5e7eb; box-shadow: 0 10px 20px rgba(0,0,0,0.1); animation: fade-in 300ms ease-out; }
.toast--destructive { background: var(--rose-600); border-color: var(--rose-700); color: #ffffff; }
.toast__body { flex: 1; }
.toast__title { font-weight: 600; font-size: 14px; }
.toast__description { font-size: 13px; opacity: 0.9; margin-top: 4px; }
.toast__close { color: inherit; opacity: 0.6; }

/* === Animations === */
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-25%); } }
@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes label-in {
  from { opacity: 0; transform: translateX(10px) translateY(-50%); }
  to { opacity: 1; transform: translateX(0) translateY(-50%); }
}

@media (max-width: 640px) {
  .hero__names { font-size: 44px; }
  .countdown__grid { grid-template-columns: repeat(2, 1fr); }
  .timeline__line, .timeline__year { left: 32px; }
  .timeline__item--left, .timeline__item--right { justify-content: flex-end; }
  .timeline__card { width: calc(100% - 80px); }
  .rsvp__card { padding: 24px; }
  .rsvp__choices { flex-direction: column; }
}
"#;
